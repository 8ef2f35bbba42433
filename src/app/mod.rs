//! Application layer coordinating state, events, and actions.
//!
//! This module is the search coordinator: it sits between the front-end
//! (main.rs) and the backend/fetch layers, implementing the event-driven state
//! machine that powers the search UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Fetches
//!                           ↑                                  ↓
//!                           └──────── Backend Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Fetch commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordination
//! - [`modes`]: Search mode type and per-mode page sizes
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, BackendResponse, Event};
pub use modes::SearchMode;
pub use state::{ResultSet, SearchState};

//! View model computation and terminal rendering.
//!
//! This layer turns coordinator state into display-ready structures and
//! renders them. It is split the same way as the rest of the crate's MVVM
//! flow:
//!
//! - [`viewmodel`]: immutable, display-ready result structures
//! - [`highlight`]: search-term emphasis segmentation
//! - [`pagination`]: sliding pagination window computation
//! - [`renderer`]: ANSI text output for the CLI front-end

pub mod highlight;
pub mod pagination;
pub mod renderer;
pub mod viewmodel;

pub use highlight::{highlight, Segment};
pub use pagination::{visible_pages, PageItem};
pub use renderer::{render_profile, render_results};
pub use viewmodel::{ResultCard, ResultsViewModel};

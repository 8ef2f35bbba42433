//! Litscope: a search front-end for a scholarly publication index.
//!
//! Litscope provides:
//! - Term-based and similarity-based article search, merged into one view
//! - Researcher search with profile and AI-summary lookups
//! - Client-side pagination over committed result sets
//! - Search-term highlighting in abstracts
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Entry Point (main.rs)                          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Backend Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (backend/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP client │   │ - Async fetch │
//! │ - Highlight   │   │ - Wire types  │   │ - Join policy │
//! │ - Pagination  │   │ - Trait seam  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Config paths (infrastructure/)                   │
//! │  - Error types (domain/error)                       │
//! │  - Article/researcher models (domain/)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Search state machine with event/action model
//! - [`backend`]: The [`SearchBackend`](backend::SearchBackend) trait and its
//!   HTTP implementation
//! - [`domain`]: Core domain types (articles, researchers, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Asynchronous fetch execution
//! - [`ui`]: View models, highlighting, pagination, and rendering
//! - `observability`: tracing subscriber setup (internal)
//!
//! # Data Flow
//!
//! 1. The front-end turns user input into an [`Event`]
//! 2. [`handle_event`] mutates [`SearchState`] and returns fetch [`Action`]s
//! 3. [`worker::dispatch`] executes each action against the backend
//! 4. The resulting response event is fed back into [`handle_event`]
//! 5. [`SearchState::compute_viewmodel`] produces the renderable view
//!
//! Backend responses carry the generation of the submission they belong to;
//! responses from superseded submissions are discarded, never committed.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod backend;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

use std::path::Path;

use serde::Deserialize;

pub use app::{handle_event, Action, Event, SearchMode, SearchState};
pub use domain::{Article, Researcher, Result, SearchError};

/// Application configuration, loaded from a TOML file.
///
/// All fields are optional in the file; missing values fall back to defaults.
///
/// ```toml
/// # ~/.config/litscope/config.toml
/// base_url = "http://localhost:8000"
/// request_timeout_secs = 20
/// semantic_k = 10
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the search API.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Number of semantic results requested alongside each article search.
    pub semantic_k: usize,

    /// Tracing level when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 20,
            semantic_k: 10,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Io`] when the file cannot be read and
    /// [`SearchError::Config`] when it is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| SearchError::Config(e.to_string()))
    }

    /// Loads configuration from the default location, falling back to
    /// defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Propagates read and parse failures for a file that exists; a missing
    /// file is not an error.
    pub fn load_default() -> Result<Self> {
        match infrastructure::default_config_file() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

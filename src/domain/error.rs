//! Error types for litscope operations.
//!
//! This module defines the centralized error type [`SearchError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The taxonomy mirrors what the backend can actually signal: a distinguished
//! not-found case (HTTP 404) and a generic network-or-server failure for
//! everything else. A failed search clears all result state; a not-found lookup
//! renders a dedicated "not found" view instead of an empty list.

use thiserror::Error;

/// The main error type for litscope operations.
///
/// Consolidates all error conditions that can occur while talking to the search
/// backend or loading configuration. Transport and decode failures from
/// `reqwest` convert automatically via `#[from]`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The requested entity does not exist (HTTP 404).
    ///
    /// Only produced by point lookups (article, researcher, profile, summary).
    /// Search endpoints signal absence with an empty result list instead.
    #[error("{resource} not found")]
    NotFound {
        /// Human-readable description of what was looked up.
        resource: String,
    },

    /// The backend answered with a non-success status other than 404.
    ///
    /// Carries the HTTP status and a snippet of the response body, if any.
    #[error("backend error ({status}): {message}")]
    Backend {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body snippet or status description.
        message: String,
    },

    /// Transport-level failure: connection, timeout, or body decode.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration is invalid or malformed.
    ///
    /// The string describes the specific configuration problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed (configuration file reads).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Returns `true` for the distinguished not-found case.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A specialized `Result` type for litscope operations.
pub type Result<T> = std::result::Result<T, SearchError>;

//! Actions representing fetch work to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions are the boundary between pure state transitions and effectful
//! backend calls: the runtime executes them asynchronously (see
//! [`crate::worker`]) and feeds the outcome back in as a
//! [`BackendResponse`](crate::app::handler::Event::BackendResponse) event.
//!
//! Each fetch action carries the submission generation it was issued for, so
//! the coordinator can discard results from superseded submissions.

use crate::app::modes::SearchMode;

/// Commands emitted by the event handler for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs the dual article fetch: term search and semantic search,
    /// executed concurrently and joined before any state update.
    FetchArticles {
        /// Trimmed query to search for.
        query: String,
        /// Generation of the submission that requested this fetch.
        generation: u64,
    },

    /// Runs the single researcher list fetch.
    FetchResearchers {
        /// Trimmed query to search for.
        query: String,
        /// Generation of the submission that requested this fetch.
        generation: u64,
    },
}

impl Action {
    /// Mode of search this action performs. Used for logging.
    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        match self {
            Self::FetchArticles { .. } => SearchMode::Articles,
            Self::FetchResearchers { .. } => SearchMode::Researchers,
        }
    }
}

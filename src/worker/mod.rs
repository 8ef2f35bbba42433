//! Asynchronous execution of fetch actions.
//!
//! The event handler is synchronous and pure; this module is the effectful
//! half of the loop. [`dispatch`] executes one [`Action`] against a
//! [`SearchBackend`] and returns the outcome as an [`Event`] to feed back
//! into the handler.
//!
//! Failure policy is fail-closed: the dual article fetch joins both channels
//! and a failure on either one fails the whole submission. Results are never
//! partially committed.

use tracing::{debug, instrument};

use crate::app::{Action, BackendResponse, Event};
use crate::backend::SearchBackend;

/// Executes a fetch action and returns its outcome as an event.
///
/// `semantic_k` is the number of semantic results requested alongside each
/// article search.
#[instrument(skip(backend), fields(mode = %action.mode()))]
pub async fn dispatch<B: SearchBackend>(backend: &B, action: Action, semantic_k: usize) -> Event {
    let response = match action {
        Action::FetchArticles { query, generation } => {
            match futures_util::try_join!(
                backend.search_articles(&query, true),
                backend.search_articles_semantic(&query, semantic_k),
            ) {
                Ok((lexical, semantic)) => {
                    debug!(
                        generation,
                        lexical = lexical.results.len(),
                        semantic = semantic.results.len(),
                        "article fetch complete"
                    );
                    BackendResponse::ArticlesLoaded {
                        generation,
                        lexical: lexical.results,
                        semantic: semantic.results,
                        ai_summary: Some(lexical.ai_summary),
                        tags: lexical.tags,
                    }
                }
                Err(e) => BackendResponse::SearchFailed {
                    generation,
                    message: e.to_string(),
                },
            }
        }
        Action::FetchResearchers { query, generation } => {
            match backend.search_researchers(&query).await {
                Ok(researchers) => {
                    debug!(generation, count = researchers.len(), "researcher fetch complete");
                    BackendResponse::ResearchersLoaded {
                        generation,
                        researchers,
                    }
                }
                Err(e) => BackendResponse::SearchFailed {
                    generation,
                    message: e.to_string(),
                },
            }
        }
    };

    Event::BackendResponse(response)
}

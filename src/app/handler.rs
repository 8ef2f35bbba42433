//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! backend responses, translating them into state changes and fetch actions.
//! It is the control-flow coordinator for the search application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the front-end or from completed fetches
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations happen via `SearchState` transition methods
//! 4. Fetch actions are collected and returned for the runtime to execute
//!
//! The returned `bool` indicates whether the view should be re-rendered.

use crate::app::modes::SearchMode;
use crate::app::state::SearchState;
use crate::app::Action;
use crate::domain::error::Result;
use crate::domain::{Article, Researcher, ScoredArticle};

/// Events triggered by user input or completed backend fetches.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Submits a search query in the given mode. Blank queries are ignored.
    Submit {
        /// Raw query text as entered.
        query: String,
        /// Target of the search.
        mode: SearchMode,
    },

    /// Moves to a target page. Out-of-range values are clamped.
    ChangePage(usize),

    /// Opens the detail view for a lexical article result.
    SelectArticle(Article),

    /// Opens the detail view for a semantic result, unwrapping the inner
    /// article.
    SelectSemanticResult(ScoredArticle),

    /// Closes the detail view. Idempotent.
    CloseDetail,

    /// Returns the snapshot to the landing state.
    Reset,

    /// Outcome of a fetch action, fed back in by the runtime.
    BackendResponse(BackendResponse),
}

/// Completed fetch outcomes, stamped with their submission generation.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendResponse {
    /// Both article channels completed successfully.
    ArticlesLoaded {
        generation: u64,
        /// Term-search results.
        lexical: Vec<Article>,
        /// Similarity-scored results.
        semantic: Vec<ScoredArticle>,
        /// AI summary text, empty when the backend produced none.
        ai_summary: Option<String>,
        /// Topic tags for the result set.
        tags: Vec<String>,
    },

    /// The researcher fetch completed successfully.
    ResearchersLoaded {
        generation: u64,
        researchers: Vec<Researcher>,
    },

    /// Any fetch of the submission failed; the whole search is treated as
    /// failed, never partially committed.
    SearchFailed {
        generation: u64,
        /// Human-readable failure description, for logging only.
        message: String,
    },
}

/// Processes an event, mutates search state, and returns actions to execute.
///
/// Returns `(render_needed, actions)`. Events that do not change observable
/// state (blank submissions, stale responses) report `false` and no actions.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the signature stable
/// for transition methods that may fail in the future.
pub fn handle_event(state: &mut SearchState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?std::mem::discriminant(event)).entered();

    match event {
        Event::Submit { query, mode } => {
            let Some(generation) = state.begin_search(query, *mode) else {
                return Ok((false, vec![]));
            };

            let action = match mode {
                SearchMode::Articles => Action::FetchArticles {
                    query: state.query.clone(),
                    generation,
                },
                SearchMode::Researchers => Action::FetchResearchers {
                    query: state.query.clone(),
                    generation,
                },
            };

            Ok((true, vec![action]))
        }
        Event::ChangePage(page) => {
            let before = state.current_page;
            state.change_page(*page);
            Ok((state.current_page != before, vec![]))
        }
        Event::SelectArticle(article) => {
            tracing::debug!(article_id = %article.id, "article selected");
            state.select_detail(article.id.clone());
            Ok((true, vec![]))
        }
        Event::SelectSemanticResult(scored) => {
            tracing::debug!(article_id = %scored.article.id, score = scored.score, "semantic result selected");
            state.select_detail(scored.article.id.clone());
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            let had_selection = state.selected_detail.is_some();
            state.close_detail();
            Ok((had_selection, vec![]))
        }
        Event::Reset => {
            state.reset();
            Ok((true, vec![]))
        }
        Event::BackendResponse(response) => match response {
            BackendResponse::ArticlesLoaded {
                generation,
                lexical,
                semantic,
                ai_summary,
                tags,
            } => {
                let committed = state.commit_articles(
                    *generation,
                    lexical.clone(),
                    semantic.clone(),
                    ai_summary.clone(),
                    tags.clone(),
                );
                Ok((committed, vec![]))
            }
            BackendResponse::ResearchersLoaded {
                generation,
                researchers,
            } => {
                let committed = state.commit_researchers(*generation, researchers.clone());
                Ok((committed, vec![]))
            }
            BackendResponse::SearchFailed {
                generation,
                message,
            } => {
                tracing::warn!(generation, error = %message, "search failed");
                let cleared = state.fail_search(*generation);
                Ok((cleared, vec![]))
            }
        },
    }
}

//! View model types representing renderable search results.
//!
//! Immutable view models computed from [`SearchState`](crate::app::SearchState),
//! following the MVVM pattern: the coordinator pre-computes everything the
//! renderer needs (highlight segments, page slices, pagination window) so the
//! renderer contains no business logic.

use crate::domain::{Article, QualisTier};
use crate::ui::highlight::Segment;
use crate::ui::pagination::PageItem;

/// Complete view model for one rendered page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsViewModel {
    /// Whether a search is in flight (renders a spinner instead of results).
    pub loading: bool,

    /// AI summary block, present only for non-empty article result sets.
    pub summary: Option<SummaryInfo>,

    /// Cards on the current page, already sliced and ordered.
    pub cards: Vec<ResultCard>,

    /// Pagination bar items; empty when there is a single page.
    pub pagination: Vec<PageItem>,

    pub current_page: usize,
    pub total_pages: usize,

    /// No-results message, present after a completed search with no hits.
    pub empty_state: Option<EmptyState>,

    /// Detail overlay content, present while an article is selected.
    pub detail: Option<DetailView>,
}

/// One result card, tagged by the kind of result it renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultCard {
    /// Term-search article result.
    Article(ArticleCard),
    /// Semantic article result with its similarity score.
    Semantic { card: ArticleCard, score: f64 },
    /// Researcher result.
    Researcher(ResearcherCard),
}

/// Display data for a single article result.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    /// Formatted publication line: journal, year, issue.
    pub publication: String,
    /// Qualis badge, when the journal is classified.
    pub qualis: Option<QualisTier>,
    /// Abstract text split into plain/emphasized runs for the search term.
    pub abstract_segments: Vec<Segment>,
}

/// Display data for a single researcher card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearcherCard {
    pub id: String,
    pub name: String,
    pub title: String,
    pub photo: String,
}

/// AI summary block shown above article results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryInfo {
    /// Combined lexical + semantic result count.
    pub total_results: usize,
    /// Summary text, when the backend generated one.
    pub text: Option<String>,
    /// Topic tags for the result set.
    pub tags: Vec<String>,
}

/// No-results message shown after a completed search with no hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Detail overlay content for a selected article.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub article: Article,
    /// Similarity score when the selection came from a semantic result.
    pub score: Option<f64>,
}

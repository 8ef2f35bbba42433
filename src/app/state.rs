//! Search state management and view model computation.
//!
//! This module defines [`SearchState`], the central state container for the
//! search coordinator, along with its transition methods and UI view model
//! generation. It is the single source of truth for all transient search state.
//!
//! # Architecture
//!
//! `SearchState` is mutated exclusively through its own transition methods,
//! driven by the event handler. Results are held client-side after a search
//! completes; pagination never refetches. View models are computed on demand
//! from state snapshots.
//!
//! # Submission generations
//!
//! Every submission bumps a private generation counter, and every backend
//! response carries the generation it was issued for. A response whose
//! generation no longer matches is discarded, so rapid re-submission can never
//! commit a superseded result set over a newer one. In-flight fetches are not
//! cancelled; their results simply become uncommittable.

use crate::app::modes::SearchMode;
use crate::domain::{Article, Researcher, ScoredArticle};
use crate::ui::highlight::highlight;
use crate::ui::pagination::visible_pages;
use crate::ui::viewmodel::{
    ArticleCard, DetailView, EmptyState, ResearcherCard, ResultCard, ResultsViewModel,
    SummaryInfo,
};

/// The active result set, tagged by what kind of search produced it.
///
/// Exactly one variant is ever populated, which structurally enforces the
/// invariant that article results and researcher results never coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultSet {
    /// No search has completed, or the last search failed or was reset.
    #[default]
    Empty,

    /// Article mode: lexical and semantic results merged into one view.
    Articles {
        /// Term-matching results, displayed first.
        lexical: Vec<Article>,
        /// Similarity-scored results, displayed after the lexical section.
        semantic: Vec<ScoredArticle>,
        /// AI-generated summary of the result set, when the backend produced one.
        ai_summary: Option<String>,
        /// Topic tags extracted for the result set.
        tags: Vec<String>,
    },

    /// Researcher mode: a flat researcher list.
    Researchers(Vec<Researcher>),
}

impl ResultSet {
    /// Total number of results across whichever variant is active.
    ///
    /// In article mode this is the lexical count plus the semantic count.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Articles {
                lexical, semantic, ..
            } => lexical.len() + semantic.len(),
            Self::Researchers(list) => list.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Central search coordinator state.
///
/// Holds the submitted query, the active result set, pagination bookkeeping,
/// and detail-overlay selection. Mutated by the event handler in response to
/// user input and backend responses.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Mode of the most recent submission.
    pub mode: SearchMode,

    /// Trimmed query of the most recent submission. Used for highlighting.
    pub query: String,

    /// Results of the most recent completed search.
    pub results: ResultSet,

    /// Whether a search is currently in flight.
    pub loading: bool,

    /// Latches true on the first submission and stays true until `reset`.
    pub has_searched: bool,

    /// Current page, 1-based. Always within `[1, total_pages]`.
    pub current_page: usize,

    /// Derived page count: `max(1, ceil(total / page_size))`.
    pub total_pages: usize,

    /// Id of the article open in the detail view, if any.
    pub selected_detail: Option<String>,

    /// Monotonic submission counter; see the module docs.
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Creates the initial, empty coordinator state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: SearchMode::Articles,
            query: String::new(),
            results: ResultSet::Empty,
            loading: false,
            has_searched: false,
            current_page: 1,
            total_pages: 1,
            selected_detail: None,
            generation: 0,
        }
    }

    /// Page size for the active mode.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.mode.page_size()
    }

    /// Total result count of the active result set.
    #[must_use]
    pub fn total_results(&self) -> usize {
        self.results.len()
    }

    /// Starts a new search submission.
    ///
    /// Blank queries (after trimming) are a no-op and return `None`. Otherwise
    /// stores the trimmed query and mode, marks the coordinator loading,
    /// latches `has_searched`, resets the page to 1, clears any detail
    /// selection, and returns the new submission generation to stamp onto the
    /// fetch.
    ///
    /// Prior results stay visible until the new search commits or fails.
    pub fn begin_search(&mut self, query: &str, mode: SearchMode) -> Option<u64> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            tracing::debug!("ignoring blank query submission");
            return None;
        }

        self.generation += 1;
        let _span = tracing::debug_span!(
            "begin_search",
            query = %trimmed,
            mode = %mode,
            generation = self.generation
        )
        .entered();

        self.query = trimmed.to_string();
        self.mode = mode;
        self.loading = true;
        self.has_searched = true;
        self.current_page = 1;
        self.selected_detail = None;

        Some(self.generation)
    }

    /// Commits a completed article search.
    ///
    /// Returns `false` without touching state when `generation` belongs to a
    /// superseded submission. On commit, both channels land atomically, total
    /// pages are recomputed, and loading clears.
    pub fn commit_articles(
        &mut self,
        generation: u64,
        lexical: Vec<Article>,
        semantic: Vec<ScoredArticle>,
        ai_summary: Option<String>,
        tags: Vec<String>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding stale article results"
            );
            return false;
        }

        tracing::debug!(
            lexical_count = lexical.len(),
            semantic_count = semantic.len(),
            "article search committed"
        );

        self.results = ResultSet::Articles {
            lexical,
            semantic,
            ai_summary: ai_summary.filter(|s| !s.is_empty()),
            tags,
        };
        self.recompute_pages();
        self.loading = false;
        true
    }

    /// Commits a completed researcher search. Same staleness rules as
    /// [`commit_articles`](Self::commit_articles).
    pub fn commit_researchers(&mut self, generation: u64, researchers: Vec<Researcher>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding stale researcher results"
            );
            return false;
        }

        tracing::debug!(count = researchers.len(), "researcher search committed");

        self.results = ResultSet::Researchers(researchers);
        self.recompute_pages();
        self.loading = false;
        true
    }

    /// Records a failed search, clearing all result state.
    ///
    /// Fail-closed: even if one article channel succeeded, the combined
    /// operation failed, so nothing partial survives. Stale failures are
    /// ignored just like stale successes.
    pub fn fail_search(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding stale search failure"
            );
            return false;
        }

        self.results = ResultSet::Empty;
        self.total_pages = 1;
        self.current_page = 1;
        self.loading = false;
        true
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    ///
    /// Pagination is purely client-side; no refetch happens.
    pub fn change_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.total_pages);
        if clamped != page {
            tracing::debug!(requested = page, clamped, "page out of range, clamping");
        }
        self.current_page = clamped;
    }

    /// Opens the detail view for an article id.
    pub fn select_detail(&mut self, article_id: String) {
        self.selected_detail = Some(article_id);
    }

    /// Closes the detail view. Idempotent.
    pub fn close_detail(&mut self) {
        self.selected_detail = None;
    }

    /// Returns the snapshot to its initial empty state.
    ///
    /// The generation counter is preserved so a response still in flight from
    /// before the reset can never commit into the fresh state.
    pub fn reset(&mut self) {
        let generation = self.generation;
        *self = Self::new();
        self.generation = generation;
    }

    fn recompute_pages(&mut self) {
        let size = self.page_size();
        self.total_pages = self.total_results().div_ceil(size).max(1);
    }

    /// Computes a renderable view model for the current page.
    ///
    /// Combines lexical and semantic article cards (lexical section first),
    /// slices out the current page, precomputes highlight segments for
    /// abstracts, and attaches summary, pagination window, empty state, and
    /// detail view as applicable.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ResultsViewModel {
        let cards = self.page_cards();

        let summary = match &self.results {
            ResultSet::Articles {
                ai_summary, tags, ..
            } if !self.results.is_empty() => Some(SummaryInfo {
                total_results: self.total_results(),
                text: ai_summary.clone(),
                tags: tags.clone(),
            }),
            _ => None,
        };

        let empty_state = if self.has_searched && !self.loading && self.results.is_empty() {
            Some(EmptyState {
                message: format!("No results for \"{}\"", self.query),
                subtitle: "Try different keywords or switch the search mode.".to_string(),
            })
        } else {
            None
        };

        let pagination = if self.total_pages > 1 {
            visible_pages(self.current_page, self.total_pages)
        } else {
            vec![]
        };

        ResultsViewModel {
            loading: self.loading,
            summary,
            cards,
            pagination,
            current_page: self.current_page,
            total_pages: self.total_pages,
            empty_state,
            detail: self.detail_view(),
        }
    }

    fn page_cards(&self) -> Vec<ResultCard> {
        let size = self.page_size();
        let start = (self.current_page - 1) * size;

        match &self.results {
            ResultSet::Empty => vec![],
            ResultSet::Articles {
                lexical, semantic, ..
            } => {
                let combined: Vec<ResultCard> = lexical
                    .iter()
                    .map(|a| ResultCard::Article(self.article_card(a)))
                    .chain(semantic.iter().map(|s| ResultCard::Semantic {
                        card: self.article_card(&s.article),
                        score: s.score,
                    }))
                    .collect();
                Self::page_slice(combined, start, size)
            }
            ResultSet::Researchers(list) => {
                let cards: Vec<ResultCard> = list
                    .iter()
                    .map(|r| {
                        ResultCard::Researcher(ResearcherCard {
                            id: r.id.clone(),
                            name: r.name.clone(),
                            title: r.title.clone(),
                            photo: r.photo.clone(),
                        })
                    })
                    .collect();
                Self::page_slice(cards, start, size)
            }
        }
    }

    fn page_slice(cards: Vec<ResultCard>, start: usize, size: usize) -> Vec<ResultCard> {
        cards.into_iter().skip(start).take(size).collect()
    }

    fn article_card(&self, article: &Article) -> ArticleCard {
        ArticleCard {
            id: article.id.clone(),
            title: article.title.clone(),
            publication: article.publication_info(),
            qualis: article.qualis,
            abstract_segments: highlight(&article.abstract_text, &self.query),
        }
    }

    fn detail_view(&self) -> Option<DetailView> {
        let id = self.selected_detail.as_deref()?;
        match &self.results {
            ResultSet::Articles {
                lexical, semantic, ..
            } => lexical
                .iter()
                .find(|a| a.id == id)
                .map(|a| DetailView {
                    article: a.clone(),
                    score: None,
                })
                .or_else(|| {
                    semantic.iter().find(|s| s.article.id == id).map(|s| DetailView {
                        article: s.article.clone(),
                        score: Some(s.score),
                    })
                }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Author;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {id}"),
            journal: "Nature Medicine".to_string(),
            year: 2023,
            volume: None,
            issue: None,
            abstract_text: "Machine learning in diagnostics.".to_string(),
            doi: None,
            authors: vec![Author {
                id: "r-1".to_string(),
                name: "Dr. Maria Silva Santos".to_string(),
            }],
            qualis: None,
            tags: None,
        }
    }

    fn scored(id: &str, score: f64) -> ScoredArticle {
        ScoredArticle {
            article: article(id),
            score,
        }
    }

    fn researcher(id: &str) -> Researcher {
        Researcher {
            id: id.to_string(),
            name: format!("Researcher {id}"),
            title: "Doutora em Medicina".to_string(),
            photo: String::new(),
        }
    }

    fn articles(n: usize) -> Vec<Article> {
        (0..n).map(|i| article(&format!("a-{i}"))).collect()
    }

    #[test]
    fn blank_query_is_a_no_op() {
        let mut state = SearchState::new();
        assert!(state.begin_search("   ", SearchMode::Articles).is_none());
        assert!(!state.loading);
        assert!(!state.has_searched);
    }

    #[test]
    fn begin_search_trims_and_marks_loading() {
        let mut state = SearchState::new();
        state.select_detail("a-9".to_string());

        let generation = state.begin_search("  machine learning  ", SearchMode::Articles);
        assert!(generation.is_some());
        assert_eq!(state.query, "machine learning");
        assert!(state.loading);
        assert!(state.has_searched);
        assert_eq!(state.current_page, 1);
        assert!(state.selected_detail.is_none());
    }

    #[test]
    fn loading_transitions_true_then_false_once() {
        let mut state = SearchState::new();
        let generation = state.begin_search("ml", SearchMode::Articles).unwrap();
        assert!(state.loading);
        assert!(state.commit_articles(generation, articles(3), vec![], None, vec![]));
        assert!(!state.loading);
        // a late duplicate for the same generation still matches, but loading
        // stays false rather than flapping
        assert!(state.commit_articles(generation, articles(3), vec![], None, vec![]));
        assert!(!state.loading);
    }

    #[test]
    fn total_pages_is_ceil_of_count_over_page_size() {
        let mut state = SearchState::new();
        let generation = state.begin_search("ml", SearchMode::Articles).unwrap();
        // 7 lexical + 4 semantic = 11 results at 5 per page
        let semantic = vec![
            scored("s-0", 0.9),
            scored("s-1", 0.8),
            scored("s-2", 0.7),
            scored("s-3", 0.6),
        ];
        state.commit_articles(generation, articles(7), semantic, None, vec![]);
        assert_eq!(state.total_results(), 11);
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn researcher_mode_uses_page_size_eight() {
        let mut state = SearchState::new();
        let generation = state.begin_search("silva", SearchMode::Researchers).unwrap();
        let list = (0..9).map(|i| researcher(&format!("r-{i}"))).collect();
        state.commit_researchers(generation, list);
        assert_eq!(state.total_pages, 2);
    }

    #[test]
    fn empty_result_set_still_has_one_page() {
        let mut state = SearchState::new();
        let generation = state.begin_search("xyzzy", SearchMode::Articles).unwrap();
        state.commit_articles(generation, vec![], vec![], None, vec![]);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut state = SearchState::new();
        let first = state.begin_search("old query", SearchMode::Articles).unwrap();
        let second = state.begin_search("new query", SearchMode::Articles).unwrap();

        assert!(!state.commit_articles(first, articles(3), vec![], None, vec![]));
        assert!(state.loading, "stale commit must not clear loading");
        assert_eq!(state.results, ResultSet::Empty);

        assert!(state.commit_articles(second, articles(2), vec![], None, vec![]));
        assert_eq!(state.total_results(), 2);
    }

    #[test]
    fn stale_failure_does_not_clear_newer_search() {
        let mut state = SearchState::new();
        let first = state.begin_search("old", SearchMode::Articles).unwrap();
        let second = state.begin_search("new", SearchMode::Articles).unwrap();
        state.commit_articles(second, articles(4), vec![], None, vec![]);

        assert!(!state.fail_search(first));
        assert_eq!(state.total_results(), 4);
    }

    #[test]
    fn failure_clears_everything_not_partially() {
        let mut state = SearchState::new();
        let generation = state.begin_search("ml", SearchMode::Articles).unwrap();
        state.commit_articles(generation, articles(8), vec![scored("s", 0.5)], None, vec![]);
        state.change_page(2);

        let generation = state.begin_search("ml again", SearchMode::Articles).unwrap();
        assert!(state.fail_search(generation));
        assert_eq!(state.results, ResultSet::Empty);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.current_page, 1);
        assert!(!state.loading);
    }

    #[test]
    fn change_page_clamps_to_valid_range() {
        let mut state = SearchState::new();
        let generation = state.begin_search("ml", SearchMode::Articles).unwrap();
        state.commit_articles(generation, articles(12), vec![], None, vec![]);
        assert_eq!(state.total_pages, 3);

        state.change_page(99);
        assert_eq!(state.current_page, 3);
        state.change_page(0);
        assert_eq!(state.current_page, 1);
        state.change_page(2);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn close_detail_is_idempotent() {
        let mut state = SearchState::new();
        state.select_detail("a-1".to_string());
        state.close_detail();
        assert!(state.selected_detail.is_none());
        state.close_detail();
        assert!(state.selected_detail.is_none());
    }

    #[test]
    fn reset_then_submit_matches_fresh_coordinator() {
        let mut used = SearchState::new();
        let generation = used.begin_search("ml", SearchMode::Researchers).unwrap();
        used.commit_researchers(generation, vec![researcher("r-1")]);
        used.change_page(1);
        used.reset();
        let g1 = used.begin_search("climate", SearchMode::Articles).unwrap();

        let mut fresh = SearchState::new();
        let g2 = fresh.begin_search("climate", SearchMode::Articles).unwrap();

        assert_eq!(used.query, fresh.query);
        assert_eq!(used.mode, fresh.mode);
        assert_eq!(used.results, fresh.results);
        assert_eq!(used.loading, fresh.loading);
        assert_eq!(used.has_searched, fresh.has_searched);
        assert_eq!(used.current_page, fresh.current_page);
        assert_eq!(used.total_pages, fresh.total_pages);
        assert_eq!(used.selected_detail, fresh.selected_detail);

        // equal observable outcome, even though internal generations differ
        used.commit_articles(g1, articles(2), vec![], None, vec![]);
        fresh.commit_articles(g2, articles(2), vec![], None, vec![]);
        assert_eq!(used.results, fresh.results);
    }

    #[test]
    fn viewmodel_slices_combined_results_lexical_first() {
        let mut state = SearchState::new();
        let generation = state.begin_search("ml", SearchMode::Articles).unwrap();
        let semantic = vec![scored("s-0", 0.91), scored("s-1", 0.42)];
        state.commit_articles(generation, articles(4), semantic, None, vec![]);

        let first = state.compute_viewmodel();
        assert_eq!(first.cards.len(), 5);
        assert!(matches!(first.cards[0], ResultCard::Article(_)));
        assert!(matches!(first.cards[4], ResultCard::Semantic { .. }));

        state.change_page(2);
        let second = state.compute_viewmodel();
        assert_eq!(second.cards.len(), 1);
        match &second.cards[0] {
            ResultCard::Semantic { card, score } => {
                assert_eq!(card.id, "s-1");
                assert!((score - 0.42).abs() < f64::EPSILON);
            }
            other => panic!("expected semantic card, got {other:?}"),
        }
    }

    #[test]
    fn viewmodel_surfaces_empty_state_after_failed_search() {
        let mut state = SearchState::new();
        let generation = state.begin_search("nothing here", SearchMode::Articles).unwrap();
        state.fail_search(generation);

        let vm = state.compute_viewmodel();
        assert!(vm.cards.is_empty());
        assert!(vm.summary.is_none());
        let empty = vm.empty_state.expect("empty state expected");
        assert!(empty.message.contains("nothing here"));
    }

    #[test]
    fn viewmodel_hides_pagination_for_single_page() {
        let mut state = SearchState::new();
        let generation = state.begin_search("ml", SearchMode::Articles).unwrap();
        state.commit_articles(generation, articles(3), vec![], None, vec![]);
        assert!(state.compute_viewmodel().pagination.is_empty());
    }

    #[test]
    fn detail_view_unwraps_semantic_results() {
        let mut state = SearchState::new();
        let generation = state.begin_search("ml", SearchMode::Articles).unwrap();
        state.commit_articles(
            generation,
            articles(1),
            vec![scored("s-7", 0.77)],
            None,
            vec![],
        );

        state.select_detail("s-7".to_string());
        let detail = state.compute_viewmodel().detail.expect("detail expected");
        assert_eq!(detail.article.id, "s-7");
        assert_eq!(detail.score, Some(0.77));

        state.close_detail();
        assert!(state.compute_viewmodel().detail.is_none());
    }
}

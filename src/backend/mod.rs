//! Search backend boundary.
//!
//! Defines the [`SearchBackend`] trait abstracting the external search API and
//! the wire payloads the search endpoints return. The production
//! implementation is [`HttpBackend`]; tests substitute mock implementations.

pub mod http;

use serde::{Deserialize, Serialize};

use crate::domain::{Article, Researcher, ResearcherProfile, ResearcherSummary, Result, ScoredArticle};

pub use http::HttpBackend;

/// Payload of the lexical article search endpoint.
///
/// Field names follow the backend's wire format: results under `resultados`,
/// the AI summary under `resumo_ia` (empty when not requested or when
/// generation failed).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticleSearch {
    #[serde(rename = "resultados", default)]
    pub results: Vec<Article>,
    #[serde(rename = "resumo_ia", default)]
    pub ai_summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Payload of the semantic article search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SemanticSearch {
    /// The query as echoed back by the backend.
    #[serde(default)]
    pub query: String,
    #[serde(rename = "resultados", default)]
    pub results: Vec<ScoredArticle>,
}

/// Abstraction over the external search API.
///
/// All calls are plain request/response. Search endpoints signal "no hits"
/// with empty lists; point lookups signal absence with `Ok(None)`, while
/// profile and summary lookups surface [`SearchError::NotFound`]
/// (crate::domain::SearchError::NotFound) so the UI can render a distinguished
/// not-found state.
#[allow(async_fn_in_trait)]
pub trait SearchBackend {
    /// Term-based article search, optionally requesting the AI summary.
    async fn search_articles(&self, term: &str, include_summary: bool) -> Result<ArticleSearch>;

    /// Similarity-based article search returning the top `k` scored results.
    async fn search_articles_semantic(&self, term: &str, k: usize) -> Result<SemanticSearch>;

    /// Researcher search returning a flat list.
    async fn search_researchers(&self, term: &str) -> Result<Vec<Researcher>>;

    /// Full researcher profile (base data plus productions).
    async fn researcher_profile(&self, id: &str) -> Result<ResearcherProfile>;

    /// AI summary and tags for a researcher.
    async fn researcher_summary(&self, id: &str) -> Result<ResearcherSummary>;

    /// Article point lookup; absence is `Ok(None)`.
    async fn article_by_id(&self, id: &str) -> Result<Option<Article>>;

    /// Researcher point lookup; absence is `Ok(None)`.
    async fn researcher_by_id(&self, id: &str) -> Result<Option<Researcher>>;
}

//! Researcher domain model.
//!
//! Defines the [`Researcher`] card shown in researcher-mode search results and
//! the richer [`ResearcherProfile`] / [`ResearcherSummary`] payloads returned
//! by the profile endpoints.

use serde::{Deserialize, Serialize};

use super::article::Article;

/// A researcher as listed in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Researcher {
    pub id: String,
    pub name: String,
    /// Academic title, e.g. `"Doutor em Ciência da Computação"`.
    pub title: String,
    /// URI of the researcher's photo.
    pub photo: String,
}

/// Full researcher profile: base data plus their publication list.
///
/// The AI summary and tags are optional; the backend omits them when
/// generation fails or was not requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearcherProfile {
    pub researcher: Researcher,
    #[serde(default)]
    pub productions: Vec<Article>,
    #[serde(rename = "resumo_ia", default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// AI-generated summary and topic tags for a researcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearcherSummary {
    #[serde(rename = "resumo_ia")]
    pub ai_summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

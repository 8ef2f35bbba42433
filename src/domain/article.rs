//! Article domain model.
//!
//! This module defines the core [`Article`] type representing a scientific
//! publication returned by the backend, together with its author list, the
//! ordinal Qualis journal-quality tier used for display, and the
//! [`ScoredArticle`] wrapper produced by semantic search.
//!
//! Field names follow the backend's wire format (Portuguese API, English
//! entity fields), so these types deserialize directly from search responses.

use serde::{Deserialize, Serialize};

/// A single `(id, name)` author entry on an article.
///
/// Author order is meaningful and preserved as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

/// Qualis journal-quality tier, `A1` (highest) through `SQ` (unranked).
///
/// An ordinal classification used only for display ordering and coloring.
/// The derived `Ord` follows the declaration order, so `A1 < A2 < ... < SQ`
/// sorts best-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualisTier {
    A1,
    A2,
    A3,
    A4,
    B1,
    B2,
    B3,
    B4,
    C,
    #[serde(rename = "SQ")]
    Sq,
}

impl QualisTier {
    /// Display label as printed on result cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A3 => "A3",
            Self::A4 => "A4",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::B3 => "B3",
            Self::B4 => "B4",
            Self::C => "C",
            Self::Sq => "SQ",
        }
    }
}

/// A scientific article as returned by the backend search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub journal: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    /// Abstract body text; empty when the backend has none on record.
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub doi: Option<String>,
    /// Ordered author list as credited on the publication.
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualis: Option<QualisTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Article {
    /// Formats the publication line shown under the title.
    ///
    /// Joins journal, year, and issue (when present) with commas, e.g.
    /// `"Nature Medicine, 2023, Issue 3"`.
    #[must_use]
    pub fn publication_info(&self) -> String {
        let mut parts = vec![self.journal.clone(), self.year.to_string()];
        if let Some(issue) = &self.issue {
            parts.push(format!("Issue {issue}"));
        }
        parts.join(", ")
    }
}

/// An article paired with a semantic similarity score in `[0, 1]`.
///
/// Wire shape matches the backend's semantic search response, where the
/// article lives under the `documento` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    #[serde(rename = "documento")]
    pub article: Article,
    pub score: f64,
}

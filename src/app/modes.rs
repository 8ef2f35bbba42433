//! Search mode state type.
//!
//! The application operates in one of two search modes, selected before
//! submission. The mode decides which backend endpoints a search hits and the
//! page size used for client-side pagination.

use crate::domain::SearchError;

/// What a submitted query searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Article search: lexical and semantic fetches, merged client-side.
    #[default]
    Articles,

    /// Researcher search: a single flat list fetch.
    Researchers,
}

impl SearchMode {
    /// Results shown per page in this mode.
    #[must_use]
    pub const fn page_size(self) -> usize {
        match self {
            Self::Articles => 5,
            Self::Researchers => 8,
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "articles" => Ok(Self::Articles),
            "researchers" => Ok(Self::Researchers),
            other => Err(SearchError::Config(format!(
                "unknown search mode '{other}' (expected 'articles' or 'researchers')"
            ))),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Articles => f.write_str("articles"),
            Self::Researchers => f.write_str("researchers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_depends_on_mode() {
        assert_eq!(SearchMode::Articles.page_size(), 5);
        assert_eq!(SearchMode::Researchers.page_size(), 8);
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("articles".parse::<SearchMode>().unwrap(), SearchMode::Articles);
        assert_eq!(
            "researchers".parse::<SearchMode>().unwrap(),
            SearchMode::Researchers
        );
        assert!("papers".parse::<SearchMode>().is_err());
    }
}

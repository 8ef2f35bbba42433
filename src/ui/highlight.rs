//! Search-term highlighting.
//!
//! Splits a body of text into plain and emphasized segments by matching the
//! search term case-insensitively. Matching is literal and character-wise:
//! the term is never interpreted as a pattern, so characters that would be
//! special in a regular expression match themselves.

/// One run of text, either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// True when this run case-insensitively equals the search term.
    pub emphasized: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// Splits `text` into segments, emphasizing every occurrence of `term`.
///
/// Empty `text` yields no segments. An empty (or whitespace-only) `term`
/// yields the whole text as a single plain segment. The concatenation of the
/// returned segment texts always reproduces the input exactly.
///
/// ```
/// use litscope::ui::highlight::highlight;
///
/// let segments = highlight("ML helps ml researchers", "ML");
/// let emphasized: Vec<&str> = segments
///     .iter()
///     .filter(|s| s.emphasized)
///     .map(|s| s.text.as_str())
///     .collect();
/// assert_eq!(emphasized, ["ML", "ml"]);
/// ```
#[must_use]
pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    if text.is_empty() {
        return vec![];
    }
    let term = term.trim();
    if term.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(match_len) = match_len_at(&text[pos..], term) {
            if plain_start < pos {
                segments.push(Segment::plain(&text[plain_start..pos]));
            }
            segments.push(Segment::emphasized(&text[pos..pos + match_len]));
            pos += match_len;
            plain_start = pos;
        } else {
            // advance one char
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

/// Byte length of a case-insensitive match of `term` at the start of `text`,
/// or `None` if it does not match there.
fn match_len_at(text: &str, term: &str) -> Option<usize> {
    let mut text_chars = text.char_indices();
    let mut term_chars = term.chars();

    loop {
        let Some(term_char) = term_chars.next() else {
            // term exhausted: everything matched
            return Some(text_chars.next().map_or(text.len(), |(i, _)| i));
        };
        let (_, text_char) = text_chars.next()?;
        if !text_char.to_lowercase().eq(term_char.to_lowercase()) {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(highlight("", "term").is_empty());
    }

    #[test]
    fn empty_term_returns_text_unchanged() {
        let segments = highlight("some abstract text", "");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "some abstract text");
        assert!(!segments[0].emphasized);
    }

    #[test]
    fn term_not_found_leaves_nothing_emphasized() {
        let segments = highlight("climate change impact", "quantum");
        assert!(segments.iter().all(|s| !s.emphasized));
        assert_eq!(concat(&segments), "climate change impact");
    }

    #[test]
    fn all_occurrences_emphasized_case_insensitively() {
        let segments = highlight("ML helps ml researchers", "ML");
        let emphasized: Vec<_> = segments.iter().filter(|s| s.emphasized).collect();
        assert_eq!(emphasized.len(), 2);
        assert_eq!(emphasized[0].text, "ML");
        assert_eq!(emphasized[1].text, "ml");
        assert_eq!(concat(&segments), "ML helps ml researchers");
    }

    #[test]
    fn partial_overlaps_handled_by_split_granularity() {
        let segments = highlight("learners learn learning", "learn");
        let emphasized = segments.iter().filter(|s| s.emphasized).count();
        assert_eq!(emphasized, 3);
        assert_eq!(concat(&segments), "learners learn learning");
    }

    #[test]
    fn special_pattern_characters_match_literally() {
        let segments = highlight("cost (a+b) vs (a+b)*2", "(a+b)");
        let emphasized = segments.iter().filter(|s| s.emphasized).count();
        assert_eq!(emphasized, 2);
        assert_eq!(concat(&segments), "cost (a+b) vs (a+b)*2");
    }

    #[test]
    fn adjacent_matches_produce_separate_segments() {
        let segments = highlight("abab", "ab");
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.emphasized));
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        let segments = highlight("pesquisa científica e ciência", "ciên");
        assert_eq!(concat(&segments), "pesquisa científica e ciência");
        assert_eq!(segments.iter().filter(|s| s.emphasized).count(), 1);
    }
}

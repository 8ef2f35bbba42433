//! Terminal rendering of view models.
//!
//! Formats pre-computed view models into ANSI-styled text for the CLI
//! front-end. All layout decisions live here; all content decisions live in
//! the view model computation.

use std::fmt::Write as _;

use crate::domain::{ResearcherProfile, ResearcherSummary};
use crate::ui::highlight::Segment;
use crate::ui::pagination::PageItem;
use crate::ui::viewmodel::{ArticleCard, ResultCard, ResultsViewModel};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Renders a results view model to a printable string.
#[must_use]
pub fn render_results(vm: &ResultsViewModel) -> String {
    let mut out = String::new();

    if vm.loading {
        out.push_str("Searching...\n");
        return out;
    }

    if let Some(empty) = &vm.empty_state {
        let _ = writeln!(out, "{BOLD}{}{RESET}", empty.message);
        let _ = writeln!(out, "{DIM}{}{RESET}", empty.subtitle);
        return out;
    }

    if let Some(summary) = &vm.summary {
        let _ = writeln!(out, "{BOLD}{} results{RESET}", summary.total_results);
        if let Some(text) = &summary.text {
            let _ = writeln!(out, "{text}");
        }
        if !summary.tags.is_empty() {
            let _ = writeln!(out, "{DIM}[{}]{RESET}", summary.tags.join("] ["));
        }
        out.push('\n');
    }

    for card in &vm.cards {
        match card {
            ResultCard::Article(article) => render_article_card(&mut out, article, None),
            ResultCard::Semantic { card, score } => {
                render_article_card(&mut out, card, Some(*score));
            }
            ResultCard::Researcher(researcher) => {
                let _ = writeln!(out, "{BOLD}{}{RESET}", researcher.name);
                let _ = writeln!(out, "  {}", researcher.title);
                let _ = writeln!(out, "  {DIM}{}{RESET}", researcher.photo);
                out.push('\n');
            }
        }
    }

    if let Some(detail) = &vm.detail {
        let _ = writeln!(out, "{BOLD}--- {} ---{RESET}", detail.article.title);
        let _ = writeln!(out, "{}", detail.article.publication_info());
        if let Some(doi) = &detail.article.doi {
            let _ = writeln!(out, "DOI: {doi}");
        }
        if let Some(score) = detail.score {
            let _ = writeln!(out, "Similarity: {score:.2}");
        }
        for author in &detail.article.authors {
            let _ = writeln!(out, "  {} ({})", author.name, author.id);
        }
        if !detail.article.abstract_text.is_empty() {
            let _ = writeln!(out, "\n{}", detail.article.abstract_text);
        }
        out.push('\n');
    }

    if !vm.pagination.is_empty() {
        out.push_str(&render_pagination(vm));
    }

    out
}

fn render_article_card(out: &mut String, card: &ArticleCard, score: Option<f64>) {
    let badge = card
        .qualis
        .map(|q| format!(" [{}]", q.label()))
        .unwrap_or_default();
    let score_suffix = score
        .map(|s| format!("  {DIM}~{s:.2}{RESET}"))
        .unwrap_or_default();

    let _ = writeln!(out, "{BOLD}{}{RESET}{badge}{score_suffix}", card.title);
    let _ = writeln!(out, "  {DIM}{}{RESET}", card.publication);
    if !card.abstract_segments.is_empty() {
        let _ = writeln!(out, "  {}", render_segments(&card.abstract_segments));
    }
    out.push('\n');
}

/// Concatenates segments, wrapping emphasized runs in bold.
#[must_use]
pub fn render_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.emphasized {
            let _ = write!(out, "{BOLD}{}{RESET}", segment.text);
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}

fn render_pagination(vm: &ResultsViewModel) -> String {
    let mut parts = Vec::new();
    for item in &vm.pagination {
        match item {
            PageItem::Page(n) if *n == vm.current_page => {
                parts.push(format!("{BOLD}[{n}]{RESET}"));
            }
            PageItem::Page(n) => parts.push(format!(" {n} ")),
            PageItem::Ellipsis => parts.push("...".to_string()),
        }
    }
    format!("{}  (page {} of {})\n", parts.join(" "), vm.current_page, vm.total_pages)
}

/// Renders a researcher profile with its productions and optional summary.
#[must_use]
pub fn render_profile(profile: &ResearcherProfile, summary: Option<&ResearcherSummary>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{BOLD}{}{RESET}", profile.researcher.name);
    let _ = writeln!(out, "{}", profile.researcher.title);
    let _ = writeln!(out, "{DIM}{}{RESET}\n", profile.researcher.photo);

    let summary_text = summary
        .map(|s| s.ai_summary.as_str())
        .or(profile.ai_summary.as_deref());
    if let Some(text) = summary_text {
        let _ = writeln!(out, "{text}\n");
    }

    let tags = summary
        .map(|s| s.tags.as_slice())
        .or(profile.tags.as_deref())
        .unwrap_or_default();
    if !tags.is_empty() {
        let _ = writeln!(out, "{DIM}[{}]{RESET}\n", tags.join("] ["));
    }

    let _ = writeln!(out, "{BOLD}Productions ({}){RESET}", profile.productions.len());
    for production in &profile.productions {
        let badge = production
            .qualis
            .map(|q| format!(" [{}]", q.label()))
            .unwrap_or_default();
        let _ = writeln!(out, "- {}{badge}", production.title);
        let _ = writeln!(out, "  {DIM}{}{RESET}", production.publication_info());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::highlight::highlight;
    use crate::ui::viewmodel::EmptyState;

    fn base_vm() -> ResultsViewModel {
        ResultsViewModel {
            loading: false,
            summary: None,
            cards: vec![],
            pagination: vec![],
            current_page: 1,
            total_pages: 1,
            empty_state: None,
            detail: None,
        }
    }

    #[test]
    fn loading_renders_spinner_only() {
        let vm = ResultsViewModel {
            loading: true,
            ..base_vm()
        };
        assert_eq!(render_results(&vm), "Searching...\n");
    }

    #[test]
    fn empty_state_renders_message_and_subtitle() {
        let vm = ResultsViewModel {
            empty_state: Some(EmptyState {
                message: "No results for \"xyzzy\"".to_string(),
                subtitle: "Try different keywords.".to_string(),
            }),
            ..base_vm()
        };
        let rendered = render_results(&vm);
        assert!(rendered.contains("No results for \"xyzzy\""));
        assert!(rendered.contains("Try different keywords."));
    }

    #[test]
    fn segments_wrap_emphasized_runs_in_bold() {
        let rendered = render_segments(&highlight("ML and ml", "ml"));
        assert_eq!(rendered, format!("{BOLD}ML{RESET} and {BOLD}ml{RESET}"));
    }

    #[test]
    fn pagination_marks_current_page() {
        let vm = ResultsViewModel {
            pagination: vec![PageItem::Page(1), PageItem::Page(2), PageItem::Ellipsis],
            current_page: 2,
            total_pages: 6,
            ..base_vm()
        };
        let rendered = render_results(&vm);
        assert!(rendered.contains(&format!("{BOLD}[2]{RESET}")));
        assert!(rendered.contains("(page 2 of 6)"));
    }
}

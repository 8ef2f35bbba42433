//! CLI entry point.
//!
//! Parses arguments, loads configuration, wires the event loop together
//! (handler → worker dispatch → handler), and prints rendered results to
//! stdout. Tracing goes to stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use litscope::app::{handle_event, Event, SearchMode, SearchState};
use litscope::backend::{HttpBackend, SearchBackend};
use litscope::observability::init_tracing;
use litscope::ui::{render_profile, render_results};
use litscope::{worker, Config, Result, SearchError};

#[derive(Parser)]
#[command(name = "litscope", version, about = "Search a scholarly publication index")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the search API, overriding the configured one.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Searches for articles or researchers.
    Search {
        /// Query text.
        query: String,

        /// What to search for.
        #[arg(long, default_value_t = SearchMode::Articles)]
        mode: SearchMode,

        /// Page of results to show, 1-based.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Shows a researcher profile with productions and AI summary.
    Profile {
        /// Researcher id.
        id: String,
    },

    /// Shows a single article by id.
    Article {
        /// Article id.
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_not_found() => {
            println!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default()?,
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    init_tracing(config.trace_level.as_deref());

    let backend = HttpBackend::new(reqwest::Client::new(), &config.base_url)
        .with_timeout(Duration::from_secs(config.request_timeout_secs));

    match cli.command {
        Command::Search { query, mode, page } => search(&backend, &config, &query, mode, page).await,
        Command::Profile { id } => profile(&backend, &id).await,
        Command::Article { id } => article(&backend, &id).await,
    }
}

/// Runs one full search cycle: submit, fetch, commit, render.
async fn search(
    backend: &HttpBackend,
    config: &Config,
    query: &str,
    mode: SearchMode,
    page: usize,
) -> Result<()> {
    let mut state = SearchState::new();

    let (_, actions) = handle_event(
        &mut state,
        &Event::Submit {
            query: query.to_string(),
            mode,
        },
    )?;
    if actions.is_empty() {
        println!("Nothing to search for.");
        return Ok(());
    }

    for action in actions {
        let response = worker::dispatch(backend, action, config.semantic_k).await;
        handle_event(&mut state, &response)?;
    }

    if page != 1 {
        handle_event(&mut state, &Event::ChangePage(page))?;
    }

    print!("{}", render_results(&state.compute_viewmodel()));
    Ok(())
}

async fn profile(backend: &HttpBackend, id: &str) -> Result<()> {
    let profile = backend.researcher_profile(id).await.map_err(|e| {
        if e.is_not_found() {
            SearchError::NotFound {
                resource: format!("researcher '{id}'"),
            }
        } else {
            e
        }
    })?;

    // the summary endpoint is best-effort; a profile without one still renders
    let summary = match backend.researcher_summary(id).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::debug!(id, error = %e, "no researcher summary available");
            None
        }
    };

    print!("{}", render_profile(&profile, summary.as_ref()));
    Ok(())
}

async fn article(backend: &HttpBackend, id: &str) -> Result<()> {
    let Some(article) = backend.article_by_id(id).await? else {
        return Err(SearchError::NotFound {
            resource: format!("article '{id}'"),
        });
    };

    println!("{}", article.title);
    println!("{}", article.publication_info());
    if let Some(qualis) = article.qualis {
        println!("Qualis: {}", qualis.label());
    }
    if let Some(doi) = &article.doi {
        println!("DOI: {doi}");
    }
    for author in &article.authors {
        println!("  {} ({})", author.name, author.id);
    }
    if !article.abstract_text.is_empty() {
        println!("\n{}", article.abstract_text);
    }
    Ok(())
}

use std::fs;
use std::io::{self, Write};
use std::sync::mpsc::Receiver;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::client::{HnClient, ThreadedFetcher};
use crate::config::{Config, ConfigArgs};
use crate::logging::init_tracing;
use crate::models::Story;
use crate::query::RequestLocator;
use crate::session::{FetchCompletion, Fetcher, SearchSession};
use crate::storage::{FileTermStore, MemoryTermStore, TermStore, stored_term};
use crate::stories::{SortKey, SortState};
use crate::utils::{sanitize_display, truncate_chars};

const TITLE_WIDTH: usize = 60;
const AUTHOR_WIDTH: usize = 16;

#[derive(Parser)]
#[command(name = "hacker-stories")]
#[command(version = "0.1.0")]
#[command(about = "Search Hacker News stories from the terminal", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search once and print the results as a table
    Search {
        /// Search term
        term: String,
        /// Number of pages to accumulate
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Column to sort by
        #[arg(long, value_enum, default_value_t = SortKey::Relevance)]
        sort: SortKey,
        /// Reverse the column order
        #[arg(long)]
        reverse: bool,
    },
    /// Print the stored search term
    Term,
    /// Print the request URL for a search term
    Url {
        term: String,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.resolve()?;

    match cli.command {
        None => {
            fs::create_dir_all(&config.state_dir).with_context(|| {
                format!("Failed to create state directory: {}", config.state_dir.display())
            })?;
            init_tracing(Some(&config.log_path()), "info")?;
            crate::tui::run_interactive(&config)?;
        }
        Some(Commands::Search { term, pages, sort, reverse }) => {
            init_tracing(None, "warn")?;
            search_once(&config, &term, pages, SortState::new(sort, reverse))?;
        }
        Some(Commands::Term) => {
            let store = FileTermStore::open_in(&config.state_dir)?;
            println!("{}", stored_term(&store, &config.default_term));
        }
        Some(Commands::Url { term, page }) => {
            println!("{}", RequestLocator::build(term, page).to_url(&config.api_base));
        }
    }

    Ok(())
}

/// Run one search, accumulating up to `pages` pages, and print the result table
fn search_once(config: &Config, term: &str, pages: u32, sort: SortState) -> Result<()> {
    if term.is_empty() {
        bail!("Search term cannot be empty");
    }
    if pages == 0 {
        bail!("--pages must be at least 1");
    }

    let client = HnClient::new(config.api_base.clone(), config.timeout)?;
    let (fetcher, completions) = ThreadedFetcher::new(client);
    let mut session =
        SearchSession::new(fetcher, MemoryTermStore::with_term(term), &config.default_term);

    collect_pages(&mut session, &completions, pages)?;

    let state = session.state();
    let mut stdout = io::stdout().lock();
    write_story_table(&mut stdout, &sort.apply(&state.items))?;
    writeln!(
        stdout,
        "\n{} stories for \"{}\" (through page {})",
        state.items.len(),
        sanitize_display(term),
        state.current_page
    )?;

    if state.is_error {
        bail!("Something went wrong fetching \"{}\"", term);
    }
    Ok(())
}

/// Start the session's search and follow it with up to `pages - 1` load-more
/// requests, stopping early on a failure or on the last page.
fn collect_pages<F: Fetcher, S: TermStore>(
    session: &mut SearchSession<F, S>,
    completions: &Receiver<FetchCompletion>,
    pages: u32,
) -> Result<()> {
    session.start();
    for fetched in 1..=pages {
        let completion = completions.recv().context("Fetch worker stopped without answering")?;
        session.deliver(completion);

        if session.state().is_error || fetched == pages || !session.has_more() {
            break;
        }
        session.load_more();
    }
    Ok(())
}

/// Write stories as fixed-width columns: title, author, comments, points
pub fn write_story_table<W: Write>(out: &mut W, stories: &[&Story]) -> io::Result<()> {
    writeln!(
        out,
        "{:<title$}  {:<author$}  {:>8}  {:>6}",
        "Title",
        "Author",
        "Comments",
        "Points",
        title = TITLE_WIDTH,
        author = AUTHOR_WIDTH
    )?;

    for story in stories {
        writeln!(
            out,
            "{:<title$}  {:<author$}  {:>8}  {:>6}",
            truncate_chars(&sanitize_display(&story.title), TITLE_WIDTH),
            truncate_chars(&sanitize_display(&story.author), AUTHOR_WIDTH),
            story.comment_count,
            story.point_count,
            title = TITLE_WIDTH,
            author = AUTHOR_WIDTH
        )?;
        writeln!(out, "    {}", sanitize_display(&story.link()))?;
    }

    Ok(())
}

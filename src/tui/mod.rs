// TUI module for the interactive story browser
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::{Context, Result};
pub use app::App;
use tracing::info;

use self::terminal::TerminalManager;
use crate::client::{HnClient, ThreadedFetcher};
use crate::config::Config;
use crate::session::SearchSession;
use crate::storage::FileTermStore;

/// Run the interactive TUI until the user quits
pub fn run_interactive(config: &Config) -> Result<()> {
    let store = FileTermStore::open_in(&config.state_dir)
        .with_context(|| format!("Failed to open state in {}", config.state_dir.display()))?;
    let client = HnClient::new(config.api_base.clone(), config.timeout)?;
    let (fetcher, completions) = ThreadedFetcher::new(client);

    let mut session = SearchSession::new(fetcher, store, &config.default_term);
    info!(term = session.term(), api_base = %config.api_base, "starting interactive session");
    session.start();

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(session, completions);

    // Restore the terminal before surfacing any error from the event loop
    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    res
}

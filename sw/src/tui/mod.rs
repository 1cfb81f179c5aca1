//! Terminal UI for the survey wizard
//!
//! Module split follows one rule: `state` is pure data, `app` handles keys,
//! `views` only renders, `runner` owns the terminal and the event loop.

pub mod app;
pub mod events;
pub mod runner;
pub mod state;
pub mod views;

use std::io::{Stdout, stdout};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use eyre::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

use crate::config::Config;
use crate::draft::{DraftStore, FileDraftStore};
use crate::submit::SubmitClient;
use crate::wizard::Wizard;

use runner::TuiRunner;

/// Terminal type used throughout the TUI
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter the alternate screen and raw mode
pub fn init() -> Result<Tui> {
    debug!("tui::init");
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(out)).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to its normal state
pub fn restore() -> Result<()> {
    debug!("tui::restore");
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}

/// Run the interactive wizard session to completion
pub async fn run(config: Config) -> Result<()> {
    let drafts: Box<dyn DraftStore> = Box::new(FileDraftStore::new(&config.draft_path));

    // Merge a saved draft over defaults; an unreadable draft starts fresh
    let answers = match drafts.load() {
        Ok(saved) => saved.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "Draft load failed; starting with defaults");
            Default::default()
        }
    };

    let wizard = Wizard::new(answers);
    let client = SubmitClient::new(&config)?;

    let terminal = init()?;
    let result = TuiRunner::new(terminal, wizard, drafts, client).run().await;
    restore()?;
    result
}

//! SurveyWizard - multi-step camp survey client
//!
//! CLI entry point. Without a subcommand the interactive wizard starts.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use surveywizard::badge::Badge;
use surveywizard::cli::{Cli, Command};
use surveywizard::config::Config;
use surveywizard::draft::{DraftStore, FileDraftStore};
use surveywizard::submit::SubmitClient;
use surveywizard::tui;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("surveywizard")
        .join("logs");
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    // The TUI owns the terminal, so logs always go to a file
    let log_file = fs::File::create(log_dir.join("surveywizard.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    match cli.command {
        None => {
            info!("Starting interactive wizard");
            tui::run(config).await?;
        }
        Some(Command::Badge) => {
            let store = FileDraftStore::new(&config.draft_path);
            let answers = store.load()?.unwrap_or_default();
            let badge = Badge::compute(&answers);
            println!("{} badge: {}", "★".yellow(), badge.label().cyan().bold());
        }
        Some(Command::Submit) => {
            let store = FileDraftStore::new(&config.draft_path);
            let Some(answers) = store.load()? else {
                eyre::bail!("No saved draft to submit; run the wizard first");
            };
            let badge = Badge::compute(&answers);
            let client = SubmitClient::new(&config)?;
            client
                .submit(&answers, badge)
                .await
                .context("Submission failed; draft kept")?;
            // Draft removal after submission is best-effort, like every
            // other draft write
            if let Err(e) = store.clear() {
                eprintln!("{} could not remove draft: {}", "!".yellow(), e);
            }
            println!(
                "{} Submitted. Your badge: {}",
                "✓".green(),
                badge.label().cyan().bold()
            );
        }
        Some(Command::Reset) => {
            let store = FileDraftStore::new(&config.draft_path);
            store.clear().context("Failed to remove draft")?;
            println!("{} Draft cleared", "✓".green());
        }
        Some(Command::Config) => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use sheetstore::cli::{Cli, Command};
use sheetstore::config::Config;
use sheetstore::server::AppState;
use sheetstore::{SheetStore, serve};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("sheetstore starting");

    match cli.command {
        Command::Serve { addr } => {
            let store = SheetStore::open(&config.store_path)?;
            let listen = addr.unwrap_or_else(|| config.listen_addr.clone());
            let state = AppState::new(store, &config);
            serve(state, &listen).await?;
        }
        Command::Headers => {
            let store = SheetStore::open(&config.store_path)?;
            let headers = store.headers(&config.sheet_name)?;
            for (i, header) in headers.iter().enumerate() {
                println!("{} {}", format!("{:>2}", i + 1).dimmed(), header.cyan());
            }
        }
        Command::Tail { lines } => {
            let store = SheetStore::open(&config.store_path)?;
            for row in store.tail(&config.sheet_name, lines)? {
                println!("{}", row.join(" | "));
            }
        }
        Command::Count => {
            let store = SheetStore::open(&config.store_path)?;
            let count = store.row_count(&config.sheet_name)?;
            println!("{} {} rows in {}", "✓".green(), count, config.sheet_name.cyan());
        }
    }

    Ok(())
}

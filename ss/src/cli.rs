//! CLI argument parsing for sheetstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ss")]
#[command(author, version, about = "Spreadsheet-style append-only row store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the submission endpoint
    Serve {
        /// Listen address (overrides config)
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Print the responses sheet's header row
    Headers,

    /// Show the most recent rows
    Tail {
        /// Number of rows to show
        #[arg(short, long, default_value = "10")]
        lines: usize,
    },

    /// Count appended rows
    Count,
}

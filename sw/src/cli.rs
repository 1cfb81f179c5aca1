//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Camp survey wizard
#[derive(Parser)]
#[command(
    name = "sw",
    about = "Multi-step camp survey wizard with badge scoring",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute; without one the interactive wizard starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute and print the badge for the saved draft
    Badge,

    /// Submit the saved draft without opening the wizard
    Submit,

    /// Delete the saved draft
    Reset,

    /// Print the effective configuration
    Config,
}

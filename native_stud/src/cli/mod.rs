//! Command-line interface for the table runner.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "native_stud", about = "Run five-card-stud hands between bots")]
pub struct TableCli {
    /// Path to the table config; created with defaults if missing.
    #[arg(long, default_value = "stud-table.toml")]
    pub config: PathBuf,

    /// Override the configured number of bot seats (persisted).
    #[arg(long)]
    pub bots: Option<usize>,

    /// Number of hands to play before exiting.
    #[arg(long, default_value_t = 1)]
    pub hands: u32,

    /// Verbose logging with targets.
    #[arg(long)]
    pub debug: bool,
}

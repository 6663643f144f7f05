//! Command-line interface for strictly_games.

use clap::Parser;
use std::path::PathBuf;
use strictly_games::Theme;

/// Strictly Games - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial theme (overrides the config file)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

//! Command-line interface for perfect_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Perfect Tic-Tac-Toe - play against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Terminal tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Let the computer open the game
    #[arg(long)]
    pub computer_first: bool,

    /// Print the outcome of every candidate computer move
    #[arg(long)]
    pub analysis: bool,
}

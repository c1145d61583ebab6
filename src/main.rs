//! Perfect Tic-Tac-Toe - terminal game
//!
//! The human plays O, the computer plays X.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use perfect_tictactoe::{Console, GameConfig, Player};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?
        .with_overrides(cli.computer_first, cli.analysis);

    run_session(&config)
}

/// Play games on stdin/stdout until the player stops.
#[instrument(skip(config))]
fn run_session(config: &GameConfig) -> Result<()> {
    let first = if *config.computer_first() {
        Player::X
    } else {
        Player::O
    };

    let stdin = io::stdin();
    let mut console =
        Console::new(stdin.lock(), io::stdout()).with_analysis(*config.show_analysis());
    let results = console.play_session(first)?;

    info!(games = results.len(), ?results, "Session ended");
    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

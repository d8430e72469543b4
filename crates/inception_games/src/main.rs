//! Inception Tic-Tac-Toe - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use inception_games::{logging, replay, run_tui, Cli, Command, Settings};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let settings = Settings::discover(cli.config.as_deref(), &cwd)?;

    match cli.action() {
        Command::Play => run_tui(&settings),
        Command::Replay {
            moves,
            json,
            strict,
        } => run_replay(&settings, &moves, json, strict),
    }
}

/// Replays moves and prints the final board.
#[instrument(skip(settings, moves), fields(count = moves.len()))]
fn run_replay(settings: &Settings, moves: &[String], json: bool, strict: bool) -> Result<()> {
    logging::init_stderr(settings);
    info!("Replaying moves");

    let report = replay(moves, strict)?;
    let output = if json {
        report.to_json().context("Failed to serialize game")?
    } else {
        report.to_text()
    };
    println!("{}", output);
    Ok(())
}

//! Noughts - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, Config};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => run_play(&config).await,
        Command::Replay { json, moves } => run_replay(json, &moves),
    }
}

/// Run the interactive game
async fn run_play(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    noughts::run_tui(config).await
}

/// Replay moves without a terminal UI
#[instrument(skip(moves))]
fn run_replay(json: bool, moves: &[String]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = noughts::replay(moves)?;
    info!(status = %report.status(), "Replay complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

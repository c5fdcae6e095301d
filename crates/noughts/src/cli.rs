//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play on a shared screen
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,
    },

    /// Apply a sequence of moves and print the result
    Replay {
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Moves as board indices (0-8) or labels such as `center`
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("noughts.toml"),
        }
    }
}

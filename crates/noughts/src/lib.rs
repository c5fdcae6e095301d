//! Noughts: two-player tic-tac-toe in the terminal.
//!
//! The game itself lives in [`noughts_core`]. This crate is the shell
//! around it: configuration, the command line, a headless replay
//! command and the terminal UI that forwards taps to
//! [`GameState::apply_move`](noughts_core::GameState::apply_move).
//!
//! # Example
//!
//! ```
//! use noughts::replay;
//!
//! let report = replay(&["0", "1", "center", "2", "8"].map(String::from)).unwrap();
//! assert_eq!(report.status(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod status;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AnimationConfig, Config, ConfigError, DisplayConfig, LoggingConfig};

// Crate-level exports - Headless replay
pub use replay::{ReplayReport, parse_move, replay};

// Crate-level exports - Status text
pub use status::status_line;

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, Direction, IDLE_FRAME, Reveal, action_for_key, action_for_mouse, draw,
    move_cursor, run_tui, square_at,
};

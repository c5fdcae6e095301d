//! Headless replay of a move sequence.

use crate::status::status_line;
use anyhow::{Result, anyhow};
use derive_getters::Getters;
use noughts_core::{GameState, Position};
use serde::Serialize;
use tracing::{info, instrument};

/// Final state of a replayed sequence.
#[derive(Debug, Clone, Getters, Serialize, derive_new::new)]
pub struct ReplayReport {
    /// Indices as given, including ignored ones.
    moves: Vec<usize>,
    /// State after the last move.
    state: GameState,
    /// Squares that would still accept a move.
    open: Vec<Position>,
    /// Turn indicator or outcome message.
    status: String,
}

impl ReplayReport {
    /// Board followed by the status line.
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.state.board().display(), self.status)
    }
}

/// Parses a move given as an index or a position label.
///
/// Numbers are passed through unchecked; the game ignores off-board ones.
pub fn parse_move(arg: &str) -> Result<usize> {
    if let Ok(index) = arg.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label(arg).map(Position::to_index).ok_or_else(|| {
        anyhow!(
            "Unrecognized move `{}`: expected 0-8 or a label such as `center`",
            arg
        )
    })
}

/// Replays the moves from a fresh game.
#[instrument]
pub fn replay(moves: &[String]) -> Result<ReplayReport> {
    let indices = moves
        .iter()
        .map(|m| parse_move(m))
        .collect::<Result<Vec<_>>>()?;

    let state = GameState::replay(indices.iter().copied());
    info!(moves = indices.len(), outcome = %state.outcome(), "Replay finished");

    Ok(ReplayReport::new(
        indices,
        state,
        state.valid_moves(),
        status_line(&state),
    ))
}

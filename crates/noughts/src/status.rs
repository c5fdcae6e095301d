//! One-line status text shown under the board.

use noughts_core::{GameState, Outcome};

/// Turn indicator while playing, outcome message once finished.
pub fn status_line(state: &GameState) -> String {
    match state.outcome() {
        Outcome::InProgress => format!("Player {}'s turn", state.turn()),
        outcome => outcome.to_string(),
    }
}

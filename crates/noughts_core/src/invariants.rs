//! Checks that every reachable state satisfies.
//!
//! Run after each accepted move, where violations are logged and trip a
//! `debug_assert!`, and when a state is deserialized, where they reject
//! the input.

use crate::rules::{check_winner, is_draw, is_full, winning_line};
use crate::{Board, GameState, Mark, Outcome};
use tracing::{instrument, warn};

/// X moves first, so X holds as many squares as O or exactly one more.
pub struct MarkBalance;

impl MarkBalance {
    /// Returns true if the mark counts are balanced.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }
}

/// The outcome agrees with the board.
///
/// A winner must hold a line, a draw needs a full board without one,
/// and a game in progress has neither.
pub struct OutcomeConsistent;

impl OutcomeConsistent {
    /// Returns true if the outcome matches the board.
    #[instrument(skip(state))]
    pub fn holds(state: &GameState) -> bool {
        let board = state.board();
        let valid = match state.outcome() {
            Outcome::Won(mark) => winning_line(board, mark).is_some(),
            Outcome::Draw => is_draw(board),
            Outcome::InProgress => check_winner(board).is_none() && !is_full(board),
        };
        if !valid {
            warn!(
                outcome = %state.outcome(),
                board = %board.display(),
                "Outcome inconsistent with board"
            );
        }
        valid
    }
}

/// The turn agrees with the mark counts.
///
/// In progress it names the mark due to move. Once the game is over it
/// stays on the mark that moved last, which for a win is the winner.
pub struct TurnConsistent;

impl TurnConsistent {
    /// Returns true if the turn matches the board.
    #[instrument(skip(state))]
    pub fn holds(state: &GameState) -> bool {
        let board = state.board();
        let due = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        let valid = match state.outcome() {
            Outcome::InProgress => state.turn() == due,
            Outcome::Won(mark) => state.turn() == due.opponent() && mark == state.turn(),
            Outcome::Draw => state.turn() == due.opponent(),
        };
        if !valid {
            warn!(
                turn = %state.turn(),
                outcome = %state.outcome(),
                "Turn inconsistent with board"
            );
        }
        valid
    }
}

/// Returns true if every invariant holds.
pub fn invariants_hold(state: &GameState) -> bool {
    MarkBalance::holds(state.board())
        && OutcomeConsistent::holds(state)
        && TurnConsistent::holds(state)
}

/// Asserts that all invariants hold (panics on violation in debug builds).
pub fn assert_invariants(state: &GameState) {
    let balanced = MarkBalance::holds(state.board());
    let consistent = OutcomeConsistent::holds(state);
    let turn = TurnConsistent::holds(state);
    debug_assert!(balanced, "Mark balance violated");
    debug_assert!(consistent, "Outcome inconsistent with board");
    debug_assert!(turn, "Turn inconsistent with board");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_balance_holds_through_play() {
        let mut state = GameState::new();
        for index in [4, 0, 8, 2] {
            state = state.apply_move(index);
            assert!(MarkBalance::holds(state.board()));
        }
    }

    #[test]
    fn test_balance_detects_extra_o() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::O));
        assert!(!MarkBalance::holds(&board));
    }

    #[test]
    fn test_outcome_consistent_for_finished_games() {
        assert!(OutcomeConsistent::holds(&GameState::replay([0, 1, 4, 2, 8])));
        assert!(OutcomeConsistent::holds(&GameState::replay([
            0, 1, 2, 4, 3, 5, 7, 6, 8
        ])));
    }

    #[test]
    fn test_turn_consistent_through_play() {
        let mut state = GameState::new();
        for index in [0, 3, 1, 4, 8, 5] {
            state = state.apply_move(index);
            assert!(TurnConsistent::holds(&state));
        }
        assert_eq!(state.winner(), Some(Mark::O));
    }
}

//! The game state value and its transitions.

use crate::invariants::{assert_invariants, invariants_hold};
use crate::rules::{is_full, is_winner};
use crate::{Board, InvalidState, Mark, MoveError, Outcome, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: board, mark to move, and outcome.
///
/// The outcome is derived from the board by each accepted move and is
/// never set on its own. Once it is terminal the board stops changing
/// until the state is replaced by [`GameState::reset`].
///
/// Deserializing checks the same invariants play maintains, so a state
/// with an outcome or turn the board does not support is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    turn: Mark,
    outcome: Outcome,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns a fresh game, whatever came before.
    #[instrument]
    pub fn reset() -> Self {
        debug!("Resetting game");
        Self::new()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    ///
    /// After a terminal move this stays on the mark that made it.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    /// Positions that would currently accept a move.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            return Vec::new();
        }
        Position::ALL
            .into_iter()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// Places the current mark at `index`, reporting why a move is refused.
    ///
    /// Only the mark that just moved is checked for a win.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_move(self, index: usize) -> Result<Self, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mover = self.turn;
        let mut next = self;
        next.board.set(pos, Square::Occupied(mover));

        if is_winner(&next.board, mover) {
            next.outcome = Outcome::Won(mover);
        } else if is_full(&next.board) {
            next.outcome = Outcome::Draw;
        } else {
            next.turn = mover.opponent();
        }

        debug!(position = %pos, outcome = %next.outcome, "Move applied");
        assert_invariants(&next);
        Ok(next)
    }

    /// Places the current mark at `index`.
    ///
    /// Taps on occupied squares, off-board indices and finished games
    /// leave the state untouched.
    #[must_use]
    pub fn apply_move(self, index: usize) -> Self {
        match self.try_move(index) {
            Ok(next) => next,
            Err(e) => {
                debug!(index, reason = %e, "Move ignored");
                self
            }
        }
    }

    /// Applies a sequence of indices to a fresh game.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Self {
        indices
            .into_iter()
            .fold(Self::new(), |state, index| state.apply_move(index))
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    turn: Mark,
    outcome: Outcome,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            board: raw.board,
            turn: raw.turn,
            outcome: raw.outcome,
        };
        if invariants_hold(&state) {
            Ok(state)
        } else {
            Err(InvalidState {
                turn: state.turn,
                outcome: state.outcome,
            })
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

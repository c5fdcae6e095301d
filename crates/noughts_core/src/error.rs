//! Reasons a move is refused.

use crate::{Mark, Outcome, Position};

/// Error returned by [`GameState::try_move`](crate::GameState::try_move).
///
/// [`GameState::apply_move`](crate::GameState::apply_move) swallows these
/// and hands back the unchanged state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Index {_0} is off the board (must be 0-8)")]
    OutOfBounds(usize),

    /// The square is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The game already has an outcome.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error returned when a deserialized [`GameState`](crate::GameState)
/// could not have been reached through play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Turn {turn} with outcome `{outcome}` does not match the board")]
pub struct InvalidState {
    /// Turn as given.
    pub turn: Mark,
    /// Outcome as given.
    pub outcome: Outcome,
}

impl std::error::Error for InvalidState {}

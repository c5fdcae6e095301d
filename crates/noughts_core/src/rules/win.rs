//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// Three positions that win when held by one mark.
pub type Line = [Position; 3];

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully held by `mark`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<Line> {
    let held = Square::Occupied(mark);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == held))
}

/// Returns true if `mark` holds any line.
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// Returns the mark holding a line, checking X before O.
///
/// Boards reached through play never have both.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|mark| is_winner(board, *mark))
}

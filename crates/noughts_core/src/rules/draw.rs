//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if every square is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn fill(board: &mut Board, layout: &str) {
        for (pos, c) in Position::ALL.iter().zip(layout.chars()) {
            let square = match c {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
            board.set(*pos, square);
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        fill(&mut board, "XOX.O....");
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        fill(&mut board, "XOXXOOOXX");
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, "XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

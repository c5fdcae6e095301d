//! Core domain types for tic-tac-toe.

use super::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board stored in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the square at a position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places a square at a position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns true if nothing occupies the position.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as plain text, numbering empty squares 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push_str("\n-+-+-\n");
            }
            match square {
                Square::Empty => result.push_str(&(i + 1).to_string()),
                Square::Occupied(mark) => result.push_str(&mark.to_string()),
            }
            if i % 3 < 2 {
                result.push('|');
            }
        }
        result
    }
}

/// Where the game stands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    #[display("In progress")]
    InProgress,
    /// The mark completed a line.
    #[display("Player {_0} wins!")]
    Won(Mark),
    /// Every square is filled and no line was completed.
    #[display("It's a draw!")]
    Draw,
}

impl Outcome {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

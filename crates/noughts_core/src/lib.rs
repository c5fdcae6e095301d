//! Pure tic-tac-toe game logic.
//!
//! The whole game is a single [`GameState`] value: a nine-square board,
//! the mark to move next, and an outcome derived from the board. Moves
//! are applied with [`GameState::apply_move`], a total function that
//! returns the state unchanged when the move is not allowed.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameState, Mark, Outcome};
//!
//! let state = GameState::replay([0, 1, 4, 2, 8]);
//! assert_eq!(state.outcome(), Outcome::Won(Mark::X));
//!
//! // Finished games ignore further moves until reset.
//! assert_eq!(state.apply_move(5), state);
//! assert_eq!(GameState::reset(), GameState::new());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use error::{InvalidState, MoveError};
pub use invariants::{
    MarkBalance, OutcomeConsistent, TurnConsistent, assert_invariants, invariants_hold,
};
pub use position::Position;
pub use rules::{LINES, Line};
pub use state::GameState;
pub use types::{Board, Mark, Outcome, Square};

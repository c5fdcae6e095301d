//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing of
//! turns or outcomes; [`GameState`](crate::GameState) composes them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, is_winner, winning_line};

//! Keyboard and mouse input mapped to shell actions.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// Something the user asked the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Direction),
    /// Tap the square under the cursor.
    TapCursor,
    /// Tap a specific square.
    Tap(Position),
    /// Confirm "Play Again".
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action.
///
/// While the outcome modal is open, Enter and Space confirm the restart
/// instead of tapping.
pub fn action_for_key(code: KeyCode, modal_open: bool) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') if modal_open => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') if modal_open => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::TapCursor),
        KeyCode::Up => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right => Some(Action::Cursor(Direction::Right)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(Position::from_number)
            .map(Action::Tap),
        _ => None,
    }
}

/// Maps a mouse event to an action, given the square under the pointer.
///
/// Any left click confirms the restart while the modal is open.
pub fn action_for_mouse(
    event: MouseEvent,
    square: Option<Position>,
    modal_open: bool,
) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) if modal_open => Some(Action::Restart),
        MouseEventKind::Down(MouseButton::Left) => square.map(Action::Tap),
        _ => None,
    }
}

/// Moves the cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

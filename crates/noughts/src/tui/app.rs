//! Application state and logic.

use super::input::{Action, move_cursor};
use super::reveal::Reveal;
use crate::config::{AnimationConfig, DisplayConfig};
use crate::status::status_line;
use noughts_core::{GameState, Mark, Position, Square, rules::winning_line};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Frame interval while nothing is animating.
pub const IDLE_FRAME: Duration = Duration::from_millis(100);

/// Main application state.
///
/// Holds the current [`GameState`] and everything that is purely
/// presentational: the cursor, the reveal animation and the glyphs.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    reveal: Option<Reveal>,
    lit: Vec<Position>,
    display: DisplayConfig,
    animation: AnimationConfig,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(display: DisplayConfig, animation: AnimationConfig) -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            reveal: None,
            lit: Vec::new(),
            display,
            animation,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Running reveal, if the last game was won.
    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The outcome modal is open whenever the game is over.
    pub fn modal_open(&self) -> bool {
        self.state.is_terminal()
    }

    /// Turn indicator or outcome message.
    pub fn status_line(&self) -> String {
        status_line(&self.state)
    }

    /// Modal title, present only once the game is over.
    pub fn modal_text(&self) -> Option<String> {
        self.modal_open().then(|| self.state.outcome().to_string())
    }

    /// Glyph drawn for a square.
    pub fn glyph(&self, square: Square) -> &str {
        match square {
            Square::Empty => "",
            Square::Occupied(Mark::X) => self.display.x_glyph().as_str(),
            Square::Occupied(Mark::O) => self.display.o_glyph().as_str(),
        }
    }

    /// True if the reveal currently lights this square.
    pub fn is_lit(&self, pos: Position) -> bool {
        self.lit.contains(&pos)
    }

    /// True while the reveal is still lighting squares.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveal.is_some_and(|reveal| !reveal.is_complete(now))
    }

    /// Time to wait before the next frame.
    ///
    /// Frames run at the configured rate during a reveal and fall back to
    /// [`IDLE_FRAME`] otherwise.
    pub fn frame_interval(&self, now: Instant) -> Duration {
        if self.is_animating(now) {
            self.animation.frame()
        } else {
            IDLE_FRAME.max(self.animation.frame())
        }
    }

    /// Advances the reveal to `now`. A finished reveal is left as is.
    pub fn tick(&mut self, now: Instant) {
        match self.reveal {
            Some(reveal) if reveal.is_complete(now) && self.lit.len() == 3 => {}
            Some(reveal) => self.lit = reveal.lit_positions(now).to_vec(),
            None => self.lit.clear(),
        }
    }

    /// Applies a user action. Returns true if the game state changed.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle_action(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
                false
            }
            Action::TapCursor => self.tap(self.cursor, now),
            Action::Tap(pos) => {
                self.cursor = pos;
                self.tap(pos, now)
            }
            Action::Restart => self.confirm_restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
                false
            }
        }
    }

    /// Taps a square. Returns true if the move was accepted.
    ///
    /// Taps while the modal is open go nowhere.
    #[instrument(skip(self))]
    pub fn tap(&mut self, pos: Position, now: Instant) -> bool {
        if self.modal_open() {
            debug!("Tap ignored while modal is open");
            return false;
        }

        let next = self.state.apply_move(pos.to_index());
        if next == self.state {
            return false;
        }
        self.state = next;

        if let Some(mark) = self.state.winner() {
            info!(winner = %mark, "Game won");
            self.reveal = winning_line(self.state.board(), mark)
                .map(|line| Reveal::start(line, now, self.animation.reveal()));
        } else if self.state.is_terminal() {
            info!("Game drawn");
        }
        self.tick(now);
        true
    }

    /// Answers "Play Again". Returns true if a new game started.
    #[instrument(skip(self))]
    pub fn confirm_restart(&mut self) -> bool {
        if !self.modal_open() {
            return false;
        }
        self.state = GameState::reset();
        self.reveal = None;
        self.lit.clear();
        self.cursor = Position::Center;
        info!("New game started");
        true
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DisplayConfig::default(), AnimationConfig::default())
    }
}

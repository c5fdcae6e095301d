//! Win reveal animation.
//!
//! Lights up the winning line one square at a time. It only reads the
//! line it was started with and never feeds back into the game.

use noughts_core::{Line, Position};
use std::time::{Duration, Instant};

/// A running reveal over a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    line: Line,
    started: Instant,
    duration: Duration,
}

impl Reveal {
    /// Starts revealing `line` at `now`.
    pub fn start(line: Line, now: Instant, duration: Duration) -> Self {
        Self {
            line,
            started: now,
            duration,
        }
    }

    /// The line being revealed.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Number of squares lit at `now`, from 1 up to 3.
    pub fn lit(&self, now: Instant) -> usize {
        let total = self.duration.as_millis();
        if total == 0 {
            return 3;
        }
        let elapsed = now.saturating_duration_since(self.started).as_millis();
        ((elapsed * 3 / total) as usize + 1).min(3)
    }

    /// Squares lit at `now`, in line order.
    pub fn lit_positions(&self, now: Instant) -> &[Position] {
        &self.line[..self.lit(now)]
    }

    /// True once the whole line is lit.
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

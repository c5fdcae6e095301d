//! Configuration loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration. Every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How marks are drawn.
    display: DisplayConfig,
    /// Win reveal timing.
    animation: AnimationConfig,
    /// Log destination and filter.
    logging: LoggingConfig,
}

/// Glyphs drawn for each mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Glyph for X.
    x_glyph: String,
    /// Glyph for O.
    o_glyph: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            x_glyph: "X".to_string(),
            o_glyph: "O".to_string(),
        }
    }
}

/// Timing of the win reveal and the frame loop.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Milliseconds to reveal the whole winning line.
    reveal_ms: u64,
    /// Milliseconds between frames.
    frame_ms: u64,
}

impl AnimationConfig {
    /// Reveal length as a `Duration`.
    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    /// Frame interval as a `Duration`, never zero.
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_ms: 900,
            frame_ms: 50,
        }
    }
}

/// Where the terminal UI writes its log.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path.
    file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("noughts.log"),
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Runs before any subscriber is installed, so nothing here logs.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

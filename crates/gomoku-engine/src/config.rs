//! Construction-time game configuration.
//!
//! A [`GameConfig`] is read once when a session is created and never changes
//! afterwards. It can be built in code, parsed from a TOML string, or loaded
//! from `gomoku.toml`:
//!
//! ```toml
//! board_size = 15
//! win_length = 5
//! ```

use gomoku_core::MAX_BOARD_SIZE;

use crate::board::BoardError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Number of contiguous stones needed to win.
pub const WIN_LENGTH: usize = 5;

/// Board side length used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 17;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Board side length outside `1..=MAX_BOARD_SIZE`.
    #[error("Invalid board size {0}: expected 1..={max}", max = MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),
    /// Any win length other than five.
    #[error("Unsupported win length {0}: only {expected} is supported", expected = WIN_LENGTH)]
    UnsupportedWinLength(usize),
    /// The board could not be built for the configured size.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parameters fixed for the lifetime of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    /// Side length of the square board. Defaults to 17.
    #[serde(default = "default_board_size")]
    pub board_size: usize,
    /// Stones in a row needed to win. Only 5 is accepted.
    #[serde(default = "default_win_length")]
    pub win_length: usize,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_win_length() -> usize {
    WIN_LENGTH
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: WIN_LENGTH,
        }
    }
}

impl GameConfig {
    /// Creates a validated configuration for a board of the given size.
    pub fn with_board_size(board_size: usize) -> Result<Self, ConfigError> {
        let config = GameConfig {
            board_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or a validation error.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads and validates the configuration at `path`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), board_size = config.board_size, "loaded config");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the path to the configuration file.
    ///
    /// Currently returns `gomoku.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("gomoku.toml")
    }

    /// Checks that the board size and win length are supported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        if self.win_length != WIN_LENGTH {
            return Err(ConfigError::UnsupportedWinLength(self.win_length));
        }
        Ok(())
    }
}

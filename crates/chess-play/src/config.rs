//! Configuration file loading for chess-play.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for a play session.
///
/// Every field is optional in the file. Command-line flags take precedence.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Position to start from, as FEN. The standard start when absent.
    #[serde(default)]
    pub start_fen: Option<String>,
    /// Print the board after every move.
    #[serde(default = "default_show_board")]
    pub show_board: bool,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_show_board() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            start_fen: None,
            show_board: default_show_board(),
            log_level: default_log_level(),
        }
    }
}

impl PlayConfig {
    /// Loads the configuration at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `chess-play.toml` in the
    /// working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess-play.toml")
    }
}

//! Configuration loaded from a TOML file.
//!
//! ```toml
//! log_filter = "info"
//!
//! [players]
//! first = "Ann"
//! second = "Bo"
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Player names. Empty names mean "Player 1" / "Player 2".
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerNames {
    /// First player, plays X.
    first: String,
    /// Second player, plays O.
    second: String,
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Player names.
    players: PlayerNames,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: PlayerNames::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        debug!(?config, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given; otherwise the default file when it exists,
    /// else built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces player names with those given on the command line.
    pub fn with_names(mut self, first: Option<String>, second: Option<String>) -> Self {
        if let Some(first) = first {
            self.players.first = first;
        }
        if let Some(second) = second {
            self.players.second = second;
        }
        self
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

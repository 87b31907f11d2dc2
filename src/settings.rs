//! User preferences: symbol, difficulty and an optional RNG seed.

use crate::games::tictactoe::{Difficulty, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// User-configurable settings for a session.
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// human_mark = "O"
/// difficulty = "easy"
/// seed = 42
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The human's mark; the computer plays the other one.
    human_mark: Mark,

    /// How the computer chooses its moves.
    difficulty: Difficulty,

    /// Seed for the easy opponent's RNG. Unset means OS entropy.
    seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            difficulty: Difficulty::Hard,
            seed: None,
        }
    }
}

impl Settings {
    /// Creates settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            human_mark = %settings.human_mark,
            difficulty = %settings.difficulty,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of these settings.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        human_mark: Option<Mark>,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mark) = human_mark {
            self.human_mark = mark;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// The computer's mark.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

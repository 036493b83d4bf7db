//! Settings file loading.
//!
//! The file is optional. Every key has a default and command-line flags
//! override whatever the file says.

use crate::settings::{FirstPlayer, Settings};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_tictactoe::Difficulty;
use tracing::{debug, info, instrument};

/// Contents of `strictly_tictactoe.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting difficulty.
    #[serde(default)]
    difficulty: Difficulty,

    /// Who moves first.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Fixed RNG seed for reproducible easy/medium play.
    #[serde(default)]
    seed: Option<u64>,

    /// Where the terminal UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            first_player: FirstPlayer::default(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            difficulty = %config.difficulty,
            first_player = %config.first_player,
            "Config loaded"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    ///
    /// A file that exists but cannot be parsed is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        first_player: Option<FirstPlayer>,
        seed: Option<u64>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Settings for the first game of a session.
    pub fn settings(&self) -> Settings {
        Settings {
            difficulty: self.difficulty,
            first_player: self.first_player,
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.log_file(), &PathBuf::from("strictly_tictactoe.log"));
    }

    #[test]
    fn test_values_parse() {
        let config = GameConfig::from_toml(
            r#"
difficulty = "hard"
first_player = "computer"
seed = 42
log_file = "game.log"
"#,
        )
        .unwrap();

        assert_eq!(config.difficulty(), &Difficulty::Hard);
        assert_eq!(config.first_player(), &FirstPlayer::Computer);
        assert_eq!(config.seed(), &Some(42));
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_bad_values_are_errors() {
        let err = GameConfig::from_toml(r#"difficulty = "impossible""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("strictly_tictactoe_missing_config_test.toml");
        let config = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_file_is_read() {
        let path = std::env::temp_dir().join(format!(
            "strictly_tictactoe_config_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "difficulty = \"medium\"\n").unwrap();

        let config = GameConfig::load_or_default(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.difficulty(), &Difficulty::Medium);
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(
            Some(Difficulty::Hard),
            None,
            Some(7),
            None,
        );
        assert_eq!(config.difficulty(), &Difficulty::Hard);
        assert_eq!(config.first_player(), &FirstPlayer::Human);
        assert_eq!(config.seed(), &Some(7));
    }
}

use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Board, DEFAULT_COLS, DEFAULT_ROWS};

/// Largest accepted row or column count
pub const MAX_DIMENSION: usize = 64;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

/// Board dimensions, fixed for the whole game.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if self.board.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be <= {MAX_DIMENSION}"
            )));
        }
        if self.board.cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.cols must be <= {MAX_DIMENSION}"
            )));
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Build an empty board with the configured dimensions.
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        Board::new(self.board.rows, self.board.cols)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

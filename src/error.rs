use std::path::PathBuf;

/// Errors returned when a move cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("The selected column is already filled, please choose another.")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("piece at row {row}, column {col} has an empty cell beneath it")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors raised while reading a column choice from a human.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter a number between 1 and {cols}")]
    NotANumber { cols: usize },

    #[error("Please enter a number between 1 and {cols}")]
    OutOfRange { cols: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

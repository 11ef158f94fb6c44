//! Error types for the board codec and configuration loading
//!
//! The search itself never fails: "no legal move" is `None` and a deadline
//! abort is handled inside the searcher.

use std::path::PathBuf;

/// Errors from decoding an external board snapshot.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The payload did not contain exactly 64 cells
    #[error("expected 64 cells in board payload, got {0}")]
    WrongCellCount(usize),

    /// A token could not be parsed as an integer
    #[error("invalid cell token {token:?} at index {index}")]
    InvalidToken { index: usize, token: String },

    /// A cell value outside {-1, 0, 1}
    #[error("cell value {value} at index {index} is not one of -1, 0, 1")]
    InvalidCell { index: usize, value: i64 },

    /// A side-to-move value other than 1 (black) or -1 (white)
    #[error("color {0} is not 1 (black) or -1 (white)")]
    InvalidColor(i64),
}

/// Errors from loading a configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`crate::config::SearchConfig`]
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A named setting had a value it does not accept
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Result type for board decoding
pub type BoardResult<T> = Result<T, BoardError>;

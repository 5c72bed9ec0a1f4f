//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
///
/// Attempting to place a mark on an occupied slot is deliberately not
/// represented here: [`Board::apply_move`](crate::Board::apply_move)
/// reports rejection through its boolean return so the turn loop can
/// re-prompt without special-casing a fault.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal moves available")]
    NoMovesAvailable,

    #[error("board string has {got} cells, expected {expected} in '{context}'")]
    BoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    BadCell {
        character: char,
        position: usize,
        context: String,
    },

    #[error("unknown player kind '{input}'. Expected one of: {expected}")]
    UnknownPlayerKind { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

//! Error types for data operations
//!
//! Provides unified error handling for all parsing, loading and
//! transformation operations.

use thiserror::Error;

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No candidate splits the sampled lines into a consistent field count
    #[error("could not determine separator")]
    Separator,

    /// JSON parsed, but the top level is neither an array of objects nor an
    /// object of column arrays
    #[error("could not parse JSON data")]
    JsonShape,

    /// Input matched no known format
    #[error("unknown data format: input is neither valid JSON nor consistent CSV")]
    UnknownFormat,

    /// Input is empty
    #[error("empty input")]
    EmptyInput,

    /// A column was addressed by a name the dataset does not have
    #[error("column '{name}' not found; available columns: {}", .available.join(", "))]
    ColumnNotFound {
        name: String,
        available: Vec<String>,
    },

    /// Filter ranges do not line up with the non-id attributes
    #[error("expected {expected} filter ranges (one per non-id column), got {got}")]
    RangeCountMismatch { expected: usize, got: usize },

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

impl From<String> for DataError {
    fn from(s: String) -> Self {
        DataError::Other(s)
    }
}

impl From<&str> for DataError {
    fn from(s: &str) -> Self {
        DataError::Other(s.to_string())
    }
}

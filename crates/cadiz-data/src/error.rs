//! Error types for data operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading snapshot data.
///
/// Only I/O boundaries produce these. Malformed values inside an otherwise
/// readable snapshot are normalized to absent instead.
#[derive(Debug, Error)]
pub enum DataError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Price directory does not exist or is not a directory
    #[error("Not a price directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The snapshot contained no usable tickers
    #[error("Snapshot contains no usable tickers")]
    EmptyUniverse,

    /// Invalid symbol
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),
}

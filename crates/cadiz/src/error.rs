//! Error types for screening runs.

use cadiz_data::DataError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for screening runs.
pub type Result<T> = std::result::Result<T, ScreenError>;

/// Errors that abort a screening run.
///
/// Bad data for individual tickers never ends up here; it degrades to
/// neutral or absent values instead.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// Nothing to score
    #[error("Universe is empty")]
    EmptyUniverse,

    /// Snapshot loading error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Configuration file could not be parsed
    #[error("Invalid config {}: {source}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

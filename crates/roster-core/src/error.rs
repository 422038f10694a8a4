//! Error types for roster-core

use thiserror::Error;

/// Result type alias using roster-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in roster-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Dataset parsed but contains no entries
    #[error("Dataset contains no people")]
    EmptyDataset,
}

//! Error types for the command-line driver.

use thiserror::Error;

use gildedrose_core::DomainError;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid inventory: {0}")]
    Domain(#[from] DomainError),
}

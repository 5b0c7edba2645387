//! CLI-specific error types

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal with a non-zero exit
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store failure during boot
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Server or runtime I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failure
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

//! CLI-specific error types
//!
//! CLI failures are fatal: they are printed to stderr and the process
//! exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage error during init or boot
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Boot failed
    #[error("Boot failed: {0}")]
    Boot(String),
}

impl CliError {
    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::Boot(msg.into())
    }
}

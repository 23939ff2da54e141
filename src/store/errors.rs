//! # Storage Errors
//!
//! Error types for the storage layer. Failures are not retried; they
//! propagate to the caller.

use thiserror::Error;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to open the database
    #[error("Failed to open database: {0}")]
    Open(#[source] sqlx::Error),

    /// Query, connection, or commit failure
    #[error("Database error: {0}")]
    Query(#[from] sqlx::Error),
}

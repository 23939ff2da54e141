//! # Store Handle
//!
//! Owns the SQLite connection pool and hands out scoped sessions.
//!
//! Schema initialization is an explicit, idempotent call made once at
//! process start, never a request-handling side effect.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::errors::{StoreError, StoreResult};
use super::session::StoreSession;

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS advertisements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    price REAL NOT NULL,
    author TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

/// Handle to the advertisement store
pub struct AdStore {
    pool: SqlitePool,
}

impl AdStore {
    /// Open the database file, creating it if absent.
    pub async fn connect(path: &Path) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(StoreError::Open)?;

        Ok(Self { pool })
    }

    /// Open an in-memory store.
    ///
    /// The pool is pinned to a single connection; the database lives as
    /// long as that connection does.
    pub async fn connect_in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(StoreError::Open)?;

        Ok(Self { pool })
    }

    /// Idempotently ensure the record table exists.
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Acquire a scoped session from the pool.
    pub async fn session(&self) -> StoreResult<StoreSession> {
        let conn = self.pool.acquire().await?;
        Ok(StoreSession::new(conn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let store = AdStore::connect_in_memory().await.unwrap();
        store.init_schema().await.unwrap();
        store.init_schema().await.unwrap();
    }

    #[tokio::test]
    async fn test_session_acquired_after_init() {
        let store = AdStore::connect_in_memory().await.unwrap();
        store.init_schema().await.unwrap();
        let _session = store.session().await.unwrap();
    }
}

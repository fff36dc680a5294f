//! SQLite-backed blob store.
//!
//! A single `blobs` table keyed by TEXT primary key. Each `set` is one
//! upsert statement, so the stored value is replaced atomically; a
//! cancelled write leaves the previous row intact.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::BlobStore;

const CREATE_BLOBS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS blobs (
    key        TEXT PRIMARY KEY,
    value      BLOB NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

/// `BlobStore` over a sqlite connection pool.
#[derive(Clone)]
pub struct SqliteBlobStore {
    pool: SqlitePool,
}

impl SqliteBlobStore {
    /// Wrap an existing pool and ensure the schema exists.
    pub async fn new(pool: SqlitePool) -> DomainResult<Self> {
        sqlx::query(CREATE_BLOBS_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Open (creating if missing) a database at `database_url`, e.g.
    /// `sqlite:pokedex.db` or `sqlite::memory:`.
    pub async fn connect(database_url: &str, max_connections: u32) -> DomainResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|_| DomainError::Storage(format!("invalid database url: {database_url}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::new(pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    async fn get(&self, key: &str) -> DomainResult<Option<Vec<u8>>> {
        let value: Option<Vec<u8>> =
            sqlx::query_scalar("SELECT value FROM blobs WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> DomainResult<()> {
        sqlx::query(
            r#"INSERT INTO blobs (key, value, updated_at) VALUES (?, ?, ?)
               ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                              updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM blobs WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

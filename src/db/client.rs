//! Database client contract and the SQLite-backed chat database.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::error::AppResult;

/// Operations the handle manager needs from a database client.
#[async_trait]
pub trait DatabaseClient: Send + Sync + 'static {
    /// Open the underlying connection.
    async fn connect(&self) -> AppResult<()>;

    /// Round-trip a trivial query.
    async fn ping(&self) -> AppResult<()>;

    /// Close all connections.
    async fn close(&self);
}

/// Shared handle to the chat database.
///
/// Connections are opened lazily; constructing one never touches the
/// database.
#[derive(Debug, Clone)]
pub struct ChatDatabase {
    pool: SqlitePool,
}

impl ChatDatabase {
    /// Build a lazily-connecting pool from parsed options.
    pub fn new(options: SqliteConnectOptions, config: &DatabaseConfig) -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy_with(options);

        Self { pool }
    }
}

#[async_trait]
impl DatabaseClient for ChatDatabase {
    async fn connect(&self) -> AppResult<()> {
        // Acquiring forces the pool to open its first connection
        let conn = self.pool.acquire().await?;
        drop(conn);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

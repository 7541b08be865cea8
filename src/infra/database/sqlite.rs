//! SQLite client store implementation.
//!
//! Used for embedded deployments and for tests that need a real SQL engine
//! without external services.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, instrument};

use crate::domain::{Client, ClientId, ClientStore, DatabaseError};

use super::PoolConfig;

/// SQLite-backed client store with connection pooling
pub struct SqliteClientStore {
    pool: SqlitePool,
}

impl SqliteClientStore {
    /// Create a new SQLite store.
    ///
    /// Every connection to an in-memory database sees its own empty
    /// database, so in-memory URLs get a single connection that is never
    /// recycled.
    pub async fn new(database_url: &str, config: PoolConfig) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DatabaseError::Connection(e.to_string()))?
            .create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .min_connections(config.min_connections)
                .idle_timeout(config.idle_timeout)
                .max_lifetime(config.max_lifetime)
        };

        info!("Opening SQLite database...");
        let pool = pool_options
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        info!("Opened SQLite database");
        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    pub async fn in_memory() -> Result<Self, DatabaseError> {
        Self::new("sqlite::memory:", PoolConfig::default()).await
    }

    /// Get the underlying connection pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl ClientStore for SqliteClientStore {
    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS client (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn insert_client(&self, name: &str) -> Result<ClientId, DatabaseError> {
        let result = sqlx::query("INSERT INTO client (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NoRowsAffected);
        }

        // AUTOINCREMENT rowids start at 1
        match result.last_insert_rowid() {
            id if id > 0 => Ok(id),
            _ => Err(DatabaseError::NoGeneratedKey),
        }
    }

    #[instrument(skip(self))]
    async fn find_name(&self, id: ClientId) -> Result<Option<String>, DatabaseError> {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM client WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(name)
    }

    #[instrument(skip(self))]
    async fn update_name(&self, id: ClientId, name: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query("UPDATE client SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_client(&self, id: ClientId) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM client WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn list_clients(&self) -> Result<Vec<Client>, DatabaseError> {
        let rows = sqlx::query_as::<_, (ClientId, String)>("SELECT id, name FROM client ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Client { id, name })
            .collect())
    }
}

//! PostgreSQL client store implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgPoolOptions};
use tracing::{info, instrument};

use crate::domain::{Client, ClientId, ClientStore, DatabaseError};

use super::PoolConfig;

/// PostgreSQL-backed client store with connection pooling
pub struct PostgresClientStore {
    pool: PgPool,
}

impl PostgresClientStore {
    /// Create a new PostgreSQL store with custom configuration
    pub async fn new(database_url: &str, config: PoolConfig) -> Result<Self, DatabaseError> {
        info!("Connecting to PostgreSQL...");
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .connect(database_url)
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Get the underlying connection pool
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_client(row: &sqlx::postgres::PgRow) -> Result<Client, DatabaseError> {
        Ok(Client {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}

#[async_trait]
impl ClientStore for PostgresClientStore {
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
        sqlx::query("CREATE TABLE IF NOT EXISTS client (id BIGSERIAL PRIMARY KEY, name TEXT)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn insert_client(&self, name: &str) -> Result<ClientId, DatabaseError> {
        let row = sqlx::query("INSERT INTO client (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        // RETURNING yields one row per inserted row
        let row = row.ok_or(DatabaseError::NoRowsAffected)?;

        row.try_get::<Option<ClientId>, _>("id")?
            .ok_or(DatabaseError::NoGeneratedKey)
    }

    #[instrument(skip(self))]
    async fn find_name(&self, id: ClientId) -> Result<Option<String>, DatabaseError> {
        let row = sqlx::query("SELECT name FROM client WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("name")?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn update_name(&self, id: ClientId, name: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query("UPDATE client SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_client(&self, id: ClientId) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM client WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn list_clients(&self) -> Result<Vec<Client>, DatabaseError> {
        let rows = sqlx::query("SELECT id, name FROM client ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_client).collect()
    }
}

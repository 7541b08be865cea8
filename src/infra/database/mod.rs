//! Concrete database client implementations.
//!
//! This module contains the sqlx-backed adapters that implement the
//! `ClientStore` trait defined in the domain layer, plus the pool settings
//! they share.

pub mod postgres;
pub mod sqlite;

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::info;
use validator::Validate;

use crate::domain::{ClientStore, DatabaseError};

pub use postgres::PostgresClientStore;
pub use sqlite::SqliteClientStore;

/// Connection pool configuration
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_pool_bounds"))]
pub struct PoolConfig {
    #[validate(range(min = 1, max = 1000))]
    pub max_connections: u32,
    pub min_connections: u32,
    #[validate(custom(function = "validate_nonzero_timeout"))]
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(3),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

fn validate_pool_bounds(config: &PoolConfig) -> Result<(), validator::ValidationError> {
    if config.min_connections > config.max_connections {
        let mut err = validator::ValidationError::new("pool_bounds");
        err.message = Some("min_connections must not exceed max_connections".into());
        return Err(err);
    }
    Ok(())
}

/// Rejects timeouts shorter than one second.
pub(crate) fn validate_nonzero_timeout(
    timeout: &Duration,
) -> Result<(), validator::ValidationError> {
    if timeout.as_secs() == 0 {
        let mut err = validator::ValidationError::new("timeout");
        err.message = Some("timeout must be at least one second".into());
        return Err(err);
    }
    Ok(())
}

/// Store backends selectable through the database URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Sqlite,
}

impl StoreBackend {
    /// Infer the backend from the URL scheme.
    pub fn from_url(database_url: &str) -> Result<Self, DatabaseError> {
        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if database_url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            let scheme = database_url.split(':').next().unwrap_or_default();
            Err(DatabaseError::Connection(format!(
                "unsupported database url scheme '{scheme}'"
            )))
        }
    }
}

/// Connect to the store named by `database_url` and return it behind the
/// `ClientStore` trait.
pub async fn connect_store(
    database_url: &SecretString,
    config: &PoolConfig,
) -> Result<Arc<dyn ClientStore>, DatabaseError> {
    let url = database_url.expose_secret();
    let backend = StoreBackend::from_url(url)?;
    info!(?backend, "Selected client store backend");

    let store: Arc<dyn ClientStore> = match backend {
        StoreBackend::Postgres => Arc::new(PostgresClientStore::new(url, config.clone()).await?),
        StoreBackend::Sqlite => Arc::new(SqliteClientStore::new(url, config.clone()).await?),
    };
    Ok(store)
}

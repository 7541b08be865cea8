//! Domain traits defining contracts for external systems.

use async_trait::async_trait;

use super::error::DatabaseError;
use super::types::{Client, ClientId};

/// Persistence contract for the `client` table.
///
/// Every method runs exactly one statement on a connection borrowed from the
/// pool for the duration of that call. Interpreting row counts is left to
/// the caller.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Check database connectivity
    async fn health_check(&self) -> Result<(), DatabaseError>;

    /// Create the `client` table if it does not exist yet
    async fn ensure_schema(&self) -> Result<(), DatabaseError>;

    /// Insert a client and return the id the store generated for it.
    ///
    /// Fails when the insert affects no rows or yields no generated key.
    async fn insert_client(&self, name: &str) -> Result<ClientId, DatabaseError>;

    /// Look up the name of a client, `None` when no row matches
    async fn find_name(&self, id: ClientId) -> Result<Option<String>, DatabaseError>;

    /// Rename a client, returning the number of rows affected
    async fn update_name(&self, id: ClientId, name: &str) -> Result<u64, DatabaseError>;

    /// Delete a client, returning the number of rows affected
    async fn delete_client(&self, id: ClientId) -> Result<u64, DatabaseError>;

    /// All clients, ordered by id
    async fn list_clients(&self) -> Result<Vec<Client>, DatabaseError>;
}

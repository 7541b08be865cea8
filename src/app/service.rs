//! Application service layer.
//!
//! This module contains the client operations. Each one issues a single
//! statement through the `ClientStore` abstraction, interprets its result,
//! and collapses every failure into a `ClientError`.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, instrument, warn};

use crate::domain::{
    Client, ClientError, ClientId, ClientStore, DatabaseError, HealthResponse, HealthStatus,
};
use crate::infra::observability::record_client_operation;

/// Application service for client persistence.
///
/// Holds no state of its own beyond the injected store; the store is the
/// sole source of truth.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(PostgresClientStore::new(&url, PoolConfig::default()).await?);
/// let service = ClientService::new(store);
///
/// let id = service.create("Acme").await?;
/// assert_eq!(service.get_by_id(id).await?, "Acme");
/// ```
pub struct ClientService {
    store: Arc<dyn ClientStore>,
}

impl ClientService {
    /// Creates a new `ClientService` backed by `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// Creates a client and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the insert fails, affects no rows, or
    /// yields no generated id.
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<ClientId, ClientError> {
        let started = Instant::now();
        let result = self.store.insert_client(name).await;
        record_client_operation("create", result.is_ok(), started);

        let id = result.map_err(|e| store_failure("Error creating client", e))?;
        info!(client_id = id, "Client created");
        Ok(id)
    }

    /// Returns the name of the client with the given id.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if no client has this id or the lookup fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ClientId) -> Result<String, ClientError> {
        let started = Instant::now();
        let result = self.store.find_name(id).await;
        record_client_operation("get_by_id", matches!(result, Ok(Some(_))), started);

        match result {
            Ok(Some(name)) => Ok(name),
            Ok(None) => Err(missing(id)),
            Err(e) => Err(store_failure("Error getting client name", e)),
        }
    }

    /// Renames the client with the given id.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if no row was updated or the update fails.
    #[instrument(skip(self))]
    pub async fn set_name(&self, id: ClientId, name: &str) -> Result<(), ClientError> {
        let started = Instant::now();
        let result = self.store.update_name(id, name).await;
        record_client_operation("set_name", matches!(result, Ok(n) if n > 0), started);

        match result {
            Ok(0) => Err(missing(id)),
            Ok(_) => {
                info!(client_id = id, "Client renamed");
                Ok(())
            }
            Err(e) => Err(store_failure("Error updating client name", e)),
        }
    }

    /// Deletes the client with the given id.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if no row was deleted or the delete fails.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: ClientId) -> Result<(), ClientError> {
        let started = Instant::now();
        let result = self.store.delete_client(id).await;
        record_client_operation("delete_by_id", matches!(result, Ok(n) if n > 0), started);

        match result {
            Ok(0) => Err(missing(id)),
            Ok(_) => {
                info!(client_id = id, "Client deleted");
                Ok(())
            }
            Err(e) => Err(store_failure("Error deleting client", e)),
        }
    }

    /// Lists every client in store order. Empty when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Client>, ClientError> {
        let started = Instant::now();
        let result = self.store.list_clients().await;
        record_client_operation("list_all", result.is_ok(), started);

        let clients = result.map_err(|e| store_failure("Error retrieving clients", e))?;
        debug!(count = clients.len(), "Listed clients");
        Ok(clients)
    }

    /// Performs a health check on the store.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> HealthResponse {
        let database = match self.store.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                HealthStatus::Unhealthy
            }
        };

        HealthResponse::new(database)
    }
}

/// Log a store failure and translate it into the uniform client error.
fn store_failure(context: &str, err: DatabaseError) -> ClientError {
    error!(error = %err, "{context}");
    ClientError::new(format!("{context}: {err}"))
}

fn missing(id: ClientId) -> ClientError {
    debug!(client_id = id, "Client not found");
    ClientError::not_found(id)
}

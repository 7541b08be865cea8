//! Application state management.
//!
//! This module provides the shared application state that is
//! accessible to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::domain::ClientStore;
use crate::infra::PrometheusHandle;

use super::service::ClientService;

/// Shared application state for the Axum web server.
///
/// Handlers only see the `ClientService`; the concrete store behind it is
/// chosen at startup.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
///
/// let store = Arc::new(SqliteClientStore::in_memory().await?);
/// let state = AppState::new(store);
///
/// let router = create_router(Arc::new(state), &ServerConfig::default());
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The client service containing the persistence operations.
    pub service: Arc<ClientService>,

    /// Prometheus handle, present when metrics are enabled.
    pub metrics: Option<Arc<PrometheusHandle>>,
}

impl AppState {
    /// Creates a new `AppState` wired to the provided store.
    #[must_use]
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self {
            service: Arc::new(ClientService::new(store)),
            metrics: None,
        }
    }

    /// Attaches a metrics handle for the `/metrics` endpoint.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Option<Arc<PrometheusHandle>>) -> Self {
        self.metrics = metrics;
        self
    }
}

//! Mock implementations for testing.
//!
//! These mocks provide in-memory implementations of domain traits
//! that can be configured to simulate various scenarios including
//! success, failure, and edge cases.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::{Client, ClientId, ClientStore, DatabaseError};

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// If true, operations will fail.
    pub should_fail: bool,
    /// Custom error message for failures.
    pub error_message: Option<String>,
    /// Simulated latency in milliseconds.
    pub latency_ms: Option<u64>,
    /// Error returned by `insert_client` in place of inserting a row.
    pub insert_failure: Option<DatabaseError>,
}

impl MockConfig {
    /// Creates a config that always succeeds.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that always fails.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Adds simulated latency.
    #[must_use]
    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency_ms = Some(ms);
        self
    }

    /// Makes inserts fail with `err` while other statements succeed.
    #[must_use]
    pub fn with_insert_failure(mut self, err: DatabaseError) -> Self {
        self.insert_failure = Some(err);
        self
    }
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<ClientId, String>,
    last_id: ClientId,
}

/// Mock client store for testing.
///
/// Keeps rows in an ordered map and hands out ids the way an
/// autoincrement column does: ids are never reused after a delete.
///
/// # Example
///
/// ```ignore
/// use client_service::test_utils::{MockClientStore, mocks::MockConfig};
///
/// // Create a mock that succeeds
/// let mock = MockClientStore::new();
///
/// // Create a mock that fails
/// let failing_mock = MockClientStore::with_config(MockConfig::failure("DB error"));
/// ```
pub struct MockClientStore {
    table: Mutex<Table>,
    config: MockConfig,
    call_count: AtomicU64,
    is_healthy: AtomicBool,
}

impl MockClientStore {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            table: Mutex::new(Table::default()),
            config,
            call_count: AtomicU64::new(0),
            is_healthy: AtomicBool::new(true),
        }
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Gets the number of statements issued, health checks excluded.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Sets the health status.
    pub fn set_healthy(&self, healthy: bool) {
        self.is_healthy.store(healthy, Ordering::Relaxed);
    }

    /// Snapshot of the stored rows.
    pub fn rows(&self) -> Vec<Client> {
        self.table
            .lock()
            .unwrap()
            .rows
            .iter()
            .map(|(id, name)| Client::new(*id, name.clone()))
            .collect()
    }

    async fn begin_call(&self) -> Result<(), DatabaseError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(ms) = self.config.latency_ms {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }

        self.check_should_fail()
    }

    fn check_should_fail(&self) -> Result<(), DatabaseError> {
        if self.config.should_fail {
            let msg = self
                .config
                .error_message
                .clone()
                .unwrap_or_else(|| "Mock database error".to_string());
            return Err(DatabaseError::Query(msg));
        }
        Ok(())
    }
}

impl Default for MockClientStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientStore for MockClientStore {
    async fn health_check(&self) -> Result<(), DatabaseError> {
        if !self.is_healthy.load(Ordering::Relaxed) {
            return Err(DatabaseError::Connection(
                "Mock database unhealthy".to_string(),
            ));
        }

        self.check_should_fail()
    }

    async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        self.check_should_fail()
    }

    async fn insert_client(&self, name: &str) -> Result<ClientId, DatabaseError> {
        self.begin_call().await?;

        if let Some(err) = &self.config.insert_failure {
            return Err(err.clone());
        }

        let mut table = self.table.lock().unwrap();
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, name.to_string());
        Ok(id)
    }

    async fn find_name(&self, id: ClientId) -> Result<Option<String>, DatabaseError> {
        self.begin_call().await?;

        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn update_name(&self, id: ClientId, name: &str) -> Result<u64, DatabaseError> {
        self.begin_call().await?;

        let mut table = self.table.lock().unwrap();
        match table.rows.get_mut(&id) {
            Some(existing) => {
                *existing = name.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_client(&self, id: ClientId) -> Result<u64, DatabaseError> {
        self.begin_call().await?;

        let mut table = self.table.lock().unwrap();
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }

    async fn list_clients(&self) -> Result<Vec<Client>, DatabaseError> {
        self.begin_call().await?;

        Ok(self.rows())
    }
}

//! Infrastructure layer implementations.

pub mod database;
pub mod observability;

pub use database::{
    PoolConfig, PostgresClientStore, SqliteClientStore, StoreBackend, connect_store,
};
pub use observability::{LogFormat, PrometheusHandle, init_metrics_handle, init_tracing};

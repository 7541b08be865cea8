//! Client Service
//!
//! Persistence operations for a single `client` entity (create, read,
//! rename, delete, list) behind a trait-based store, exposed over HTTP.
//!
//! # Architecture Overview
//!
//! This crate is organized into four main layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   API Layer                  │
//! │        HTTP handlers, routing, probes        │
//! ├─────────────────────────────────────────────┤
//! │               Application Layer              │
//! │   ClientService, configuration, app state    │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │   Client type, ClientStore trait, errors     │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │  PostgreSQL / SQLite stores, observability   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Trait-based abstraction**: the store sits behind `ClientStore`
//! - **Dependency injection**: the service receives its store through its constructor
//! - **Testability**: an in-memory mock store and SQLite in-memory databases
//! - **Uniform errors**: every failure reaches callers as a single `ClientError`
//! - **Logging**: Structured logging with `tracing`
//! - **Security**: the database URL is held as a `secrecy` secret
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use client_service::api::create_router;
//! use client_service::app::{AppState, ServerConfig};
//! use client_service::infra::SqliteClientStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(SqliteClientStore::in_memory().await?);
//!     store.ensure_schema().await?;
//!
//!     let state = Arc::new(AppState::new(store));
//!     let router = create_router(state, &ServerConfig::default());
//!     axum::serve(listener, router).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infra;

// Test utilities are available in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

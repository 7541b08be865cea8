//! Application layer containing business logic, configuration and shared state.

pub mod config;
pub mod service;
pub mod state;

pub use config::{AppConfig, ServerConfig};
pub use service::ClientService;
pub use state::AppState;

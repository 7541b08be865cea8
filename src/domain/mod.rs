//! Domain layer containing core business types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ClientError, ConfigError, DatabaseError};
pub use traits::ClientStore;
pub use types::{
    Client, ClientId, CreateClientRequest, CreateClientResponse, ErrorDetail, ErrorResponse,
    HealthResponse, HealthStatus, UpdateClientRequest,
};

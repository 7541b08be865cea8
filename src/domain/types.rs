use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a client.
pub type ClientId = i64;

/// Core domain entity: a persisted client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
}

impl Client {
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Request payload for creating a new client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
}

impl CreateClientRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request payload for renaming an existing client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    pub name: String,
}

impl UpdateClientRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Response payload returned after a client is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateClientResponse {
    pub id: ClientId,
}

/// Error body shared by all failing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub r#type: String,
    pub message: String,
}

/// Health check status for services.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health check response for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub database: HealthStatus,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// The overall status follows the database, the only dependency.
    pub fn new(database: HealthStatus) -> Self {
        Self {
            status: database,
            database,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = Client::new(7, "Acme");

        assert_eq!(client.id, 7);
        assert_eq!(client.name, "Acme");
    }

    #[test]
    fn test_client_serialization_shape() {
        let client = Client::new(42, "Globex");
        let json = serde_json::to_value(&client).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["name"], "Globex");
    }

    #[test]
    fn test_create_request_accepts_any_name() {
        let request: CreateClientRequest = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert_eq!(request.name, "");
    }

    #[test]
    fn test_health_response_follows_database() {
        let healthy = HealthResponse::new(HealthStatus::Healthy);
        assert_eq!(healthy.status, HealthStatus::Healthy);

        let unhealthy = HealthResponse::new(HealthStatus::Unhealthy);
        assert_eq!(unhealthy.status, HealthStatus::Unhealthy);
        assert_eq!(unhealthy.database, HealthStatus::Unhealthy);
    }

    #[test]
    fn test_health_status_serializes_lowercase() {
        let json = serde_json::to_string(&HealthStatus::Unhealthy).unwrap();
        assert_eq!(json, "\"unhealthy\"");
    }
}

//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::domain::{
    Client, ClientError, ClientId, CreateClientRequest, CreateClientResponse, ErrorDetail,
    ErrorResponse, HealthResponse, HealthStatus, UpdateClientRequest,
};

/// Create a new client
///
/// `POST /clients` → `201 {"id": ..}`
pub async fn create_client_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<CreateClientResponse>), ClientError> {
    let id = state.service.create(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(CreateClientResponse { id })))
}

/// List all clients
pub async fn list_clients_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Client>>, ClientError> {
    let clients = state.service.list_all().await?;
    Ok(Json(clients))
}

/// Get a single client by ID
pub async fn get_client_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ClientId>,
) -> Result<Json<Client>, ClientError> {
    let name = state.service.get_by_id(id).await?;
    Ok(Json(Client { id, name }))
}

/// Rename a client
pub async fn update_client_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ClientId>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<StatusCode, ClientError> {
    state.service.set_name(id, &payload.name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a client
pub async fn delete_client_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ClientId>,
) -> Result<StatusCode, ClientError> {
    state.service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Detailed health check
pub async fn health_check_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let health = state.service.health_check().await;
    Json(health)
}

/// Kubernetes liveness probe
pub async fn liveness_handler() -> StatusCode {
    StatusCode::OK
}

/// Kubernetes readiness probe
pub async fn readiness_handler(State(state): State<Arc<AppState>>) -> StatusCode {
    let health = state.service.health_check().await;
    match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Prometheus scrape endpoint; 404 when metrics are disabled.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Every client error is reported the same way, whether the id was missing
/// or the store failed.
impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: ErrorDetail {
                r#type: "client_error".to_string(),
                message: self.message().to_string(),
            },
        });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

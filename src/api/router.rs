//! HTTP routing configuration.

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::app::{AppState, ServerConfig};

use super::handlers::{
    create_client_handler, delete_client_handler, get_client_handler, health_check_handler,
    list_clients_handler, liveness_handler, metrics_handler, readiness_handler,
    update_client_handler,
};

/// Build the application router.
pub fn create_router(app_state: Arc<AppState>, config: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ));

    // Client routes
    let client_routes = Router::new()
        .route("/", post(create_client_handler).get(list_clients_handler))
        .route(
            "/{id}",
            get(get_client_handler)
                .put(update_client_handler)
                .delete(delete_client_handler),
        );

    // Health routes
    let health_routes = Router::new()
        .route("/", get(health_check_handler))
        .route("/live", get(liveness_handler))
        .route("/ready", get(readiness_handler));

    Router::new()
        .nest("/clients", client_routes)
        .nest("/health", health_routes)
        .route("/metrics", get(metrics_handler))
        .layer(middleware)
        .with_state(app_state)
}

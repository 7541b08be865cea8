//! Request-flow tests for the HTTP API backed by an in-memory SQLite store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;

use client_service::api::create_router;
use client_service::app::{AppState, ServerConfig};
use client_service::domain::{
    Client, ClientStore, CreateClientRequest, CreateClientResponse, ErrorResponse,
    UpdateClientRequest,
};
use client_service::infra::SqliteClientStore;

async fn create_test_router() -> Router {
    let store = SqliteClientStore::in_memory().await.unwrap();
    store.ensure_schema().await.unwrap();
    let state = Arc::new(AppState::new(Arc::new(store)));
    create_router(state, &ServerConfig::default())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body_bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json<T: serde::Serialize>(method: &str, uri: &str, payload: &T) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_full_client_lifecycle_flow() {
    let router = create_test_router().await;

    // 1. POST - Create client
    let create_response = router
        .clone()
        .oneshot(with_json(
            "POST",
            "/clients",
            &CreateClientRequest::new("Lifecycle Client"),
        ))
        .await
        .unwrap();
    assert_eq!(create_response.status(), StatusCode::CREATED);
    let created: CreateClientResponse = read_json(create_response).await;
    let client_id = created.id;

    // 2. GET - Retrieve it by ID
    let get_response = router
        .clone()
        .oneshot(get(&format!("/clients/{}", client_id)))
        .await
        .unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);
    let fetched: Client = read_json(get_response).await;
    assert_eq!(fetched, Client::new(client_id, "Lifecycle Client"));

    // 3. PUT - Rename it
    let update_response = router
        .clone()
        .oneshot(with_json(
            "PUT",
            &format!("/clients/{}", client_id),
            &UpdateClientRequest::new("Renamed Client"),
        ))
        .await
        .unwrap();
    assert_eq!(update_response.status(), StatusCode::NO_CONTENT);

    // 4. GET - List shows the new name
    let list_response = router.clone().oneshot(get("/clients")).await.unwrap();
    assert_eq!(list_response.status(), StatusCode::OK);
    let clients: Vec<Client> = read_json(list_response).await;
    assert_eq!(clients, vec![Client::new(client_id, "Renamed Client")]);

    // 5. DELETE - Remove it
    let delete_response = router
        .clone()
        .oneshot(delete(&format!("/clients/{}", client_id)))
        .await
        .unwrap();
    assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

    // 6. GET - It is gone
    let gone_response = router
        .clone()
        .oneshot(get(&format!("/clients/{}", client_id)))
        .await
        .unwrap();
    assert_eq!(gone_response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(gone_response).await;
    assert_eq!(
        error.error.message,
        format!("Client with ID {} does not exist.", client_id)
    );

    let list_response = router.oneshot(get("/clients")).await.unwrap();
    let clients: Vec<Client> = read_json(list_response).await;
    assert!(clients.is_empty());
}

#[tokio::test]
async fn test_update_and_delete_missing_client_fail_uniformly() {
    let router = create_test_router().await;

    let update_response = router
        .clone()
        .oneshot(with_json(
            "PUT",
            "/clients/77",
            &UpdateClientRequest::new("Ghost"),
        ))
        .await
        .unwrap();
    assert_eq!(update_response.status(), StatusCode::BAD_REQUEST);
    let update_error: ErrorResponse = read_json(update_response).await;

    let delete_response = router.oneshot(delete("/clients/77")).await.unwrap();
    assert_eq!(delete_response.status(), StatusCode::BAD_REQUEST);
    let delete_error: ErrorResponse = read_json(delete_response).await;

    assert_eq!(update_error.error.r#type, "client_error");
    assert_eq!(update_error.error.message, delete_error.error.message);
}

#[tokio::test]
async fn test_post_malformed_json_is_rejected() {
    let router = create_test_router().await;

    let request = Request::builder()
        .method("POST")
        .uri("/clients")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_without_name_is_rejected() {
    let router = create_test_router().await;

    let request = Request::builder()
        .method("POST")
        .uri("/clients")
        .header("Content-Type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_reports_healthy_sqlite() {
    let router = create_test_router().await;

    let response = router.clone().oneshot(get("/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");
}

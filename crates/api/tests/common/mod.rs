//! Shared harness for HTTP integration tests.
//!
//! The router is the production one from [`build_app_router`], backed by an
//! [`InMemoryStore`] so these tests run without a database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use favorites_api::config::ServerConfig;
use favorites_api::router::build_app_router;
use favorites_api::state::AppState;
use favorites_db::InMemoryStore;
use favorites_service::FavoritesService;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        default_page_size: 20,
        max_page_size: 100,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Clones of the returned router share the same store, so a test can issue
/// several requests with `app.clone()`.
pub fn build_test_app() -> Router {
    let config = test_config();
    let store = Arc::new(InMemoryStore::new());
    let state = AppState {
        service: FavoritesService::new(store, config.page_settings()),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config).unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

/// POST a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Create a user and return its id as a string.
pub async fn create_user(app: &Router) -> String {
    let response = post_empty(app.clone(), "/api/v1/users").await;
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

/// Create an asset and return its id as a string.
pub async fn create_asset(app: &Router, kind: &str, data: Value) -> String {
    let response = post_json(
        app.clone(),
        "/api/v1/assets",
        serde_json::json!({ "type": kind, "data": data }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

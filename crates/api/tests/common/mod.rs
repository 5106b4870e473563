#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use savedate_api::config::{LogFormat, ServerConfig};
use savedate_api::router::build_app_router;
use savedate_api::state::AppState;
use savedate_db::{MemorySaveDateStore, SaveDateStore};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: None,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router, with all middleware layers, over the
/// given store.
pub fn build_app_with_store(store: Arc<dyn SaveDateStore>) -> Router {
    let config = test_config();
    build_app_router(test_state(store, &config), &config)
}

/// Application state over `store`, carrying a copy of `config`.
pub fn test_state(store: Arc<dyn SaveDateStore>, config: &ServerConfig) -> AppState {
    AppState {
        store,
        config: Arc::new(config.clone()),
    }
}

/// Build the application over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_app_with_store(Arc::new(MemorySaveDateStore::new()))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

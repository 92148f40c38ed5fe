//! Shared helpers for API integration tests.
//!
//! Every test app runs on a fresh in-memory store so tests are independent
//! and need no database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use perfdash_db::{ItemStore, MemoryItemStore};
use tower::ServiceExt;

use perfdash_api::config::ServerConfig;
use perfdash_api::router::build_app_router;
use perfdash_api::state::AppState;

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the application router over `store`.
pub fn build_test_app_with(store: Arc<MemoryItemStore>) -> Router {
    let store: Arc<dyn ItemStore> = store;
    build_app_router(AppState {
        store,
        pool: None,
        config: Arc::new(test_config()),
    })
}

/// Build the application router over an empty store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryItemStore::new()))
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

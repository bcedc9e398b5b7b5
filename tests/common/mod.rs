//! Common test utilities

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use itemlist_daemon::config::DEFAULT_MAX_BODY_BYTES;
use itemlist_daemon::{build_router, Catalog, ItemService, RouterConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Build a router over a catalog of `count` items with default HTTP settings.
pub fn test_app(count: usize) -> Router {
    test_app_with(count, DEFAULT_MAX_BODY_BYTES)
}

/// Build a router with a custom request body limit.
pub fn test_app_with(count: usize, max_body_bytes: usize) -> Router {
    let service = Arc::new(ItemService::new(Arc::new(Catalog::generate(count))));
    build_router(
        service,
        RouterConfig {
            max_body_bytes,
            cors_origins: vec!["*".to_string()],
        },
    )
}

/// Send a request to a clone of the router and return status plus parsed JSON body.
///
/// An empty body is returned as `Value::Null`.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}

/// Ids of the `items` array in a `/api/items` response.
#[allow(dead_code)] // Not every integration test binary lists items
pub fn item_ids(body: &Value) -> Vec<i64> {
    body["items"]
        .as_array()
        .expect("items should be an array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id should be an integer"))
        .collect()
}

//! Shared helpers for driving the full route table in-process.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use fakereg::http_server::{api_router, AppState};
use fakereg::store::SEED_SESSION_TOKEN;

/// Router over a freshly seeded store, plus the state for direct access.
pub fn seeded_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::seeded().expect("seed fixture"));
    (api_router(state.clone()), state)
}

/// Send one request and decode the JSON response body.
pub async fn request(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Unauthenticated GET.
pub async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    request(app, Method::GET, path, None, None).await
}

/// Unauthenticated POST with a JSON body.
pub async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::POST, path, None, Some(body)).await
}

/// POST authenticated with the seeded session token.
pub async fn post_auth(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::POST, path, Some(SEED_SESSION_TOKEN), Some(body)).await
}

/// Assert an error response: status, stable error_code, non-empty message.
pub fn assert_error(status: StatusCode, body: &Value, expected_status: StatusCode, code: &str) {
    assert_eq!(status, expected_status);
    assert_eq!(body["error_code"], code);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

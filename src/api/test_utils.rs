//! Helpers for driving the router in tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::router::create_router;
use super::state::{AppInfo, AppState};
use crate::infrastructure::user::InMemoryUserRepository;

pub fn test_info() -> AppInfo {
    AppInfo {
        environment: "test".to_string(),
        test_message: None,
        version: "0.0.0-test".to_string(),
    }
}

/// Router backed by a fresh in-memory repository
pub fn test_app() -> (Router, Arc<InMemoryUserRepository>) {
    let repository = Arc::new(InMemoryUserRepository::new());
    let state = AppState::new(repository.clone(), test_info());
    (create_router(state), repository)
}

/// Send a request and decode the JSON response body (Null when empty)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

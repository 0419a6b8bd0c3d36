#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use axum_test::TestServer;
use quicklink::application::services::LinkService;
use quicklink::infrastructure::persistence::InMemoryLinkRepository;
use quicklink::routes::{app_router, router};
use quicklink::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

/// App state backed by a fresh in-memory store.
pub fn create_test_state() -> AppState {
    let link_repo = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(link_repo));

    AppState::new(link_service)
}

/// Full application router without rate limiting.
pub fn make_server() -> TestServer {
    TestServer::new(router(create_test_state(), None)).unwrap()
}

/// Creates a link through the API and returns its JSON representation.
pub async fn create_link(server: &TestServer, url: &str, code: Option<&str>) -> Value {
    let body = match code {
        Some(code) => json!({ "url": url, "code": code }),
        None => json!({ "url": url }),
    };

    let response = server.post("/api/links").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

/// The router as served in production, with trailing-slash normalization.
pub fn make_app() -> NormalizePath<Router> {
    app_router(create_test_state(), None)
}

/// Sends one request through `app`, returning status, headers and the JSON
/// body (`Value::Null` when the body is empty).
pub async fn send(
    app: &NormalizePath<Router>,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, headers, json)
}

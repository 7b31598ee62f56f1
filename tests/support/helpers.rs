// tests/support/helpers.rs
use std::sync::Arc;

use article_board::application::services::ApplicationServices;
use article_board::domain::article::ArticleRepository;
use article_board::infrastructure::repositories::InMemoryArticleRepository;
use article_board::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn build_test_state(repo: Arc<dyn ArticleRepository>) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(repo)),
    }
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with_repo(Arc::new(InMemoryArticleRepository::new()))
}

pub fn make_test_router_with_repo(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    build_router(build_test_state(repo), &["http://localhost:3000".to_string()])
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a request and return its status plus decoded JSON body.
pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that the body is an error envelope with the given code and message.
pub fn assert_error_envelope(body: &Value, expected_code: i64, expected_message: &str) {
    assert_eq!(body["code"].as_i64(), Some(expected_code), "unexpected body: {body}");
    assert_eq!(body["data"].as_str(), Some(expected_message), "unexpected body: {body}");
}

#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use signup_api::config::ServerConfig;
use signup_api::router::build_app_router;
use signup_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Points the static directory at the workspace `static/` folder so the
/// web UI routes resolve regardless of the test's working directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static"),
        ..ServerConfig::default()
    }
}

/// Full application router over a freshly seeded directory.
///
/// Every call gets its own directory, so tests never observe each
/// other's signups.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState::seeded(config)).unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

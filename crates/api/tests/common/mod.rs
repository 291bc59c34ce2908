#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use movies_core::genre::GenrePolicy;
use movies_db::StoreHandle;
use serde_json::Value;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;

/// Id of "The Shawshank Redemption" in the embedded seed dataset.
pub const SHAWSHANK_ID: &str = "dcdd0fad-a94c-4810-8acc-5f108d3b18c3";

/// Id of "Inception" in the embedded seed dataset.
pub const INCEPTION_ID: &str = "5ad1a235-0d9c-410a-b32b-220d91689a08";

/// Build a test `ServerConfig` with the default allow-list.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![
            "http://localhost:8080".to_string(),
            "http://movies.com".to_string(),
        ],
        genre_policy: GenrePolicy::Enumerated,
        seed_path: None,
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh store seeded with the
/// embedded dataset. The store handle is returned for direct inspection.
pub fn build_test_app() -> (Router, StoreHandle) {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> (Router, StoreHandle) {
    let store = movies_db::create_store(None).expect("embedded seed must load");
    let app = build_app_router(AppState::new(config, store.clone()));
    (app, store)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_with_origin(app: &Router, uri: &str, origin: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("origin", origin)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

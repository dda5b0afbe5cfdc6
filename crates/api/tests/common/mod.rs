//! Shared harness for HTTP-level integration tests.
//!
//! Builds the full application router (the same middleware stack
//! production uses) over a per-test SQLite pool and a temporary upload
//! directory, and provides small request helpers around
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use intake_api::auth::password::hash_password;
use intake_api::auth::session::SessionConfig;
use intake_api::config::ServerConfig;
use intake_api::router::build_app_router;
use intake_api::state::AppState;
use intake_api::uploads::UploadStore;

/// Plaintext admin password used by the test configuration.
pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// Multipart boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "x-intake-test-boundary";

/// Build a test `ServerConfig` with safe defaults and the given upload dir.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        upload_dir: upload_dir.to_path_buf(),
        admin_username: "admin".to_string(),
        admin_password_hash: hash_password(ADMIN_PASSWORD).expect("hashing should succeed"),
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: "integration-test-session-secret".to_string(),
            ttl_mins: 60,
        },
    }
}

/// Build the full application router over the given pool.
///
/// Returns the router together with the `TempDir` backing the upload
/// store; keep the dir alive for the duration of the test.
pub async fn build_test_app(pool: SqlitePool) -> (Router, TempDir) {
    let upload_dir = TempDir::new().expect("tempdir should be created");
    let config = test_config(upload_dir.path());

    let uploads = UploadStore::new(upload_dir.path());
    uploads.ensure_dir().await.expect("upload dir should exist");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        uploads,
    };
    (build_app_router(state, &config), upload_dir)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: &Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_form_auth(app: &Router, uri: &str, body: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_multipart(app: &Router, uri: &str, body: Vec<u8>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be collectable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Encode text fields plus an optional `file` part as a multipart body.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((filename, data)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// The standard complete submission form used across tests.
pub fn complete_submission() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("phone", "+44 1234 567890"),
        ("project_type", "Web App"),
        ("description", "An analytical engine dashboard."),
        ("budget", "5000"),
        ("deadline", "2026-12-01"),
    ]
}

/// Log in through the API and return the session cookie pair
/// (`intake_session=<token>`) for use in `Cookie` headers.
pub async fn login(app: &Router) -> String {
    let body = format!("username=admin&password={ADMIN_PASSWORD}");
    let response = post_form(app, "/admin/login", &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "login should redirect");

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login should set a session cookie")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("cookie should have a name=value pair")
        .to_string()
}

//! Smoke tests for the service surface: landing, health, and the
//! request-id middleware.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok(pool: SqlitePool) {
    let (app, _dir) = common::build_test_app(pool).await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_is_not_found(pool: SqlitePool) {
    let (app, _dir) = common::build_test_app(pool).await;

    let response = get(&app, "/no-such-route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn responses_carry_a_request_id(pool: SqlitePool) {
    let (app, _dir) = common::build_test_app(pool).await;

    let response = get(&app, "/health").await;
    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("middleware should attach a request id");
    assert!(!request_id.to_str().unwrap().is_empty());
}

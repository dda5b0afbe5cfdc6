//! Public landing page and health check.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
///
/// Public landing banner. Rendering is delegated to the frontend; this
/// returns the data it needs.
pub async fn index() -> Json<Value> {
    Json(json!({
        "service": "project-intake",
        "message": "Submit a project request at /submit.",
    }))
}

/// GET /health
///
/// Liveness probe including a database round trip.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let db_healthy = intake_db::health_check(&state.pool).await.is_ok();
    Json(json!({
        "status": if db_healthy { "ok" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy,
    }))
}

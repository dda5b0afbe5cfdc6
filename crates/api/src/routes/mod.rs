//! Route definitions for the public and admin surfaces.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, dashboard, landing, project, submission};
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET  /                                  -> landing
/// GET  /health                            -> health check
/// GET  /submit                            -> form metadata
/// POST /submit                            -> accept submission (multipart)
///
/// GET  /admin/login                       -> login prompt / redirect
/// POST /admin/login                       -> authenticate, set session cookie
/// GET  /admin/logout                      -> clear session cookie
/// GET  /admin                             -> dashboard (session required)
/// GET  /admin/dashboard                   -> dashboard (alias)
/// GET  /admin/project/{id}                -> project detail
/// POST /admin/project/{id}/status         -> set lifecycle status
/// POST /admin/project/{id}/delete         -> delete project + attachment
/// ```
pub fn app_routes() -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/", get(dashboard::dashboard))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/project/{id}", get(project::detail))
        .route("/project/{id}/status", post(project::update_status))
        .route("/project/{id}/delete", post(project::delete));

    Router::new()
        .route("/", get(landing::index))
        .route("/health", get(landing::health))
        .route("/submit", get(submission::form).post(submission::submit))
        .nest("/admin", admin_routes)
}

//! Handlers for single-project admin actions: detail view, status updates,
//! and deletion.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;

use intake_core::status::ProjectStatus;
use intake_core::types::DbId;
use intake_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::AdminSession;
use crate::state::AppState;

/// Body of `POST /admin/project/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// GET /admin/project/{id}
///
/// Project detail, or a redirect back to the dashboard with a not-found
/// notice.
pub async fn detail(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match ProjectRepo::find_by_id(&state.pool, id).await? {
        Some(project) => Ok(Json(project).into_response()),
        None => Ok(Redirect::to("/admin?notice=project-not-found").into_response()),
    }
}

/// POST /admin/project/{id}/status
///
/// Set the project's lifecycle status. A value outside the three known
/// statuses leaves the record untouched and redirects back with a
/// validation notice. Transitions are unordered; reverting a status is
/// allowed.
pub async fn update_status(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<StatusForm>,
) -> AppResult<Response> {
    let status = match input.status.parse::<ProjectStatus>() {
        Ok(status) => status,
        Err(_) => {
            return Ok(
                Redirect::to(&format!("/admin/project/{id}?notice=invalid-status"))
                    .into_response(),
            );
        }
    };

    if !ProjectRepo::update_status(&state.pool, id, status).await? {
        return Ok(Redirect::to("/admin?notice=project-not-found").into_response());
    }

    tracing::info!(id, status = %status, "Project status updated");
    Ok(Redirect::to(&format!("/admin/project/{id}?notice=status-updated")).into_response())
}

/// POST /admin/project/{id}/delete
///
/// Remove the project and, best-effort, its attachment file. Deleting an
/// id that no longer exists is a no-op, not an error.
pub async fn delete(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    if let Some(project) = ProjectRepo::delete(&state.pool, id).await? {
        if let Some(file_path) = &project.file_path {
            state.uploads.remove(file_path).await;
        }
        tracing::info!(id, "Project deleted");
    }
    Ok(Redirect::to("/admin?notice=project-deleted").into_response())
}

//! Handler for the admin dashboard listing.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use intake_core::status::ProjectStatus;
use intake_db::models::project::{Project, ProjectFilter, StatusCounts};
use intake_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::AdminSession;
use crate::state::AppState;

/// Query parameters for `GET /admin` / `GET /admin/dashboard`.
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    /// 1-based page number (default 1).
    pub page: Option<i64>,
    /// Status filter; values outside the enum are ignored as "no filter".
    pub status: Option<String>,
    /// Free-text search over name, email, and project type.
    pub search: Option<String>,
}

/// Dashboard payload: the filtered page plus filter-independent stats.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub projects: Vec<Project>,
    pub total: i64,
    pub total_pages: i64,
    pub page: i64,
    pub stats: StatusCounts,
    /// The filters actually applied, echoed back for the view.
    pub status: Option<ProjectStatus>,
    pub search: Option<String>,
}

/// GET /admin, GET /admin/dashboard
///
/// Filtered, paginated project listing with aggregate counts for the
/// summary tiles. Requires an authenticated admin session.
pub async fn dashboard(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<Json<DashboardResponse>> {
    let status = params
        .status
        .as_deref()
        .and_then(|s| s.parse::<ProjectStatus>().ok());
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let page = params.page.unwrap_or(1);

    let filter = ProjectFilter {
        status,
        search: search.clone(),
    };
    let listing = ProjectRepo::search(&state.pool, &filter, page).await?;
    let stats = ProjectRepo::status_counts(&state.pool).await?;

    Ok(Json(DashboardResponse {
        projects: listing.projects,
        total: listing.total,
        total_pages: listing.total_pages,
        page: listing.page,
        stats,
        status,
        search,
    }))
}

//! Project entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use intake_core::status::ProjectStatus;
use intake_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
///
/// Contact fields and `created_at` are immutable after creation; only
/// `status` is ever updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    /// Stored filename of the attachment, relative to the upload directory.
    pub file_path: Option<String>,
    pub status: ProjectStatus,
    pub created_at: Timestamp,
}

/// DTO for inserting a validated submission. Status and timestamp are
/// assigned by the database.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub file_path: Option<String>,
}

/// Dashboard filter predicates. Both filters combine with AND; `None`
/// means "no restriction".
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub search: Option<String>,
}

/// One page of filtered results plus pre-pagination totals.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    /// Count of rows matching the filter, before pagination.
    pub total: i64,
    pub total_pages: i64,
    pub page: i64,
}

/// Filter-independent aggregate counts for the dashboard summary tiles.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCounts {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub completed: i64,
}

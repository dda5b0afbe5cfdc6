//! Repository for the `projects` table.

use sqlx::SqlitePool;

use intake_core::pagination;
use intake_core::status::ProjectStatus;
use intake_core::types::DbId;

use crate::models::project::{NewProject, Project, ProjectFilter, ProjectPage, StatusCounts};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, phone, project_type, description, budget, deadline, file_path, status, created_at";

/// Filter predicate shared by the count and page queries. `?1` is the
/// optional status text, `?2` the optional `%search%` pattern.
const FILTER: &str = "(?1 IS NULL OR status = ?1) \
     AND (?2 IS NULL OR name LIKE ?2 OR email LIKE ?2 OR project_type LIKE ?2)";

/// Provides all storage operations for project requests.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a validated submission, returning the created row.
    ///
    /// Status defaults to `Pending` and `created_at` is assigned by the
    /// database (both via column defaults).
    pub async fn create(pool: &SqlitePool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, email, phone, project_type, description, budget, deadline, file_path)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.project_type)
            .bind(&input.description)
            .bind(&input.budget)
            .bind(&input.deadline)
            .bind(&input.file_path)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Filtered, paginated listing for the admin dashboard.
    ///
    /// `search` matches name OR email OR project_type as a substring;
    /// matching is case-insensitive (SQLite `LIKE` semantics for ASCII),
    /// the documented choice for this service. Results are ordered newest
    /// first (`created_at DESC`, with `id DESC` as a deterministic tiebreak
    /// for rows created within the same second). A page past the end
    /// returns an empty slice, not an error.
    pub async fn search(
        pool: &SqlitePool,
        filter: &ProjectFilter,
        page: i64,
    ) -> Result<ProjectPage, sqlx::Error> {
        let status_param = filter.status.map(ProjectStatus::as_str);
        let like_param = filter.search.as_deref().map(|s| format!("%{s}%"));

        let count_query = format!("SELECT COUNT(*) FROM projects WHERE {FILTER}");
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(status_param)
            .bind(&like_param)
            .fetch_one(pool)
            .await?;

        let page_query = format!(
            "SELECT {COLUMNS} FROM projects WHERE {FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT ?3 OFFSET ?4"
        );
        let projects = sqlx::query_as::<_, Project>(&page_query)
            .bind(status_param)
            .bind(&like_param)
            .bind(pagination::PAGE_SIZE)
            .bind(pagination::offset(page))
            .fetch_all(pool)
            .await?;

        Ok(ProjectPage {
            projects,
            total,
            total_pages: pagination::total_pages(total),
            page,
        })
    }

    /// Filter-independent aggregate counts for the dashboard tiles.
    pub async fn status_counts(pool: &SqlitePool) -> Result<StatusCounts, sqlx::Error> {
        sqlx::query_as::<_, StatusCounts>(
            "SELECT COUNT(*)                                     AS total,
                    COALESCE(SUM(status = 'Pending'), 0)         AS pending,
                    COALESCE(SUM(status = 'In Progress'), 0)     AS in_progress,
                    COALESCE(SUM(status = 'Completed'), 0)       AS completed
             FROM projects",
        )
        .fetch_one(pool)
        .await
    }

    /// Set a project's status, touching no other column.
    ///
    /// Returns `false` if no row with the given `id` exists. Status
    /// validity is enforced upstream by [`ProjectStatus`]; an invalid value
    /// cannot reach this query.
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        status: ProjectStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a project by ID, returning the removed row so the caller can
    /// clean up an associated attachment. Returns `None` if no row existed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

//! Handlers for the public submission form.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::{json, Value};

use intake_core::attachment::{self, ALLOWED_EXTENSIONS, MAX_UPLOAD_BYTES};
use intake_core::submission::{self, SubmissionForm};
use intake_db::models::project::NewProject;
use intake_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /submit
///
/// Form metadata for the frontend: which fields are required, what files
/// are accepted, and the body size ceiling.
pub async fn form() -> Json<Value> {
    Json(json!({
        "required_fields": ["name", "email", "phone", "project_type", "description"],
        "optional_fields": ["budget", "deadline", "file"],
        "allowed_extensions": ALLOWED_EXTENSIONS,
        "max_upload_bytes": MAX_UPLOAD_BYTES,
    }))
}

/// POST /submit
///
/// Accept a public submission as a multipart form with an optional file.
///
/// On validation failure the response carries every error plus the
/// original input unchanged, so the submitter's form can be re-presented
/// as typed. When an attachment is present, the file is written before the
/// row is inserted; a failed write aborts the whole ingestion.
pub async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let mut form = SubmissionForm::default();
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => form.name = field.text().await?,
            "email" => form.email = field.text().await?,
            "phone" => form.phone = field.text().await?,
            "project_type" => form.project_type = field.text().await?,
            "description" => form.description = field.text().await?,
            "budget" => form.budget = field.text().await?,
            "deadline" => form.deadline = field.text().await?,
            "file" => {
                // A part with an empty filename means "no attachment".
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await?;
                if !filename.is_empty() {
                    file = Some((filename, data.to_vec()));
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    let valid = match submission::validate(&form) {
        Ok(valid) => valid,
        Err(errors) => return Ok(rejection(errors, &form)),
    };

    let mut file_path = None;
    if let Some((filename, data)) = file {
        // Reject a disallowed extension before anything touches disk.
        if let Err(e) = attachment::check_allowed(&filename) {
            return Ok(rejection(vec![e.to_string()], &form));
        }
        file_path = Some(state.uploads.save(&filename, &data).await?);
    }

    let input = NewProject {
        name: valid.name,
        email: valid.email,
        phone: valid.phone,
        project_type: valid.project_type,
        description: valid.description,
        budget: valid.budget,
        deadline: valid.deadline,
        file_path,
    };
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, "Project submitted");

    Ok(Redirect::to("/submit?submitted=1").into_response())
}

/// 400 response carrying the itemized errors plus the submitter's original
/// input, unchanged, for re-presentation.
fn rejection(errors: Vec<String>, form: &SubmissionForm) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "errors": errors,
            "form": {
                "name": form.name,
                "email": form.email,
                "phone": form.phone,
                "project_type": form.project_type,
                "description": form.description,
                "budget": form.budget,
                "deadline": form.deadline,
            },
        })),
    )
        .into_response()
}

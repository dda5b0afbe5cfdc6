//! Handlers for admin login and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth::password::verify_password;
use crate::auth::session;
use crate::error::{AppError, AppResult};
use crate::extract::admin_session_from_headers;
use crate::state::AppState;

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /admin/login
///
/// An already-authenticated admin is sent straight to the dashboard.
pub async fn login_form(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if admin_session_from_headers(&headers, &state).is_some() {
        return Redirect::to("/admin").into_response();
    }
    Json(json!({ "message": "Log in to access the admin panel." })).into_response()
}

/// POST /admin/login
///
/// On success, installs the session cookie and redirects to the dashboard.
/// On failure, answers with one generic message regardless of whether the
/// username or the password was wrong.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let username_ok = input.username == state.config.admin_username;
    let password_ok = verify_password(&input.password, &state.config.admin_password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !(username_ok && password_ok) {
        tracing::warn!("Failed admin login attempt");
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid credentials. Try again.",
                "code": "INVALID_CREDENTIALS",
            })),
        )
            .into_response());
    }

    let token = session::issue_token(&input.username, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Failed to issue session token: {e}")))?;
    let cookie = session::session_cookie(&token, &state.config.session);

    tracing::info!(username = %input.username, "Admin logged in");
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Redirect::to("/admin"),
    )
        .into_response())
}

/// GET /admin/logout
///
/// Clears the session cookie and returns to the login page.
pub async fn logout() -> Response {
    (
        AppendHeaders([(SET_COOKIE, session::clear_session_cookie())]),
        Redirect::to("/admin/login"),
    )
        .into_response()
}

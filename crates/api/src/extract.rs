//! Session-based authentication extractor for admin handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use intake_core::error::CoreError;

use crate::auth::session::{self, validate_token};
use crate::error::AppError;
use crate::state::AppState;

/// Proof of an authenticated administrator session.
///
/// Add this as a parameter to any handler that must be admin-only; the
/// check runs before the handler body, so no mutation can precede it.
/// Rejection renders as a redirect to `/admin/login`.
///
/// ```ignore
/// async fn dashboard(_session: AdminSession, State(state): State<AppState>) -> ... { }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The authenticated admin's username.
    pub username: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        admin_session_from_headers(&parts.headers, state).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Please log in to access the admin panel.".into(),
            ))
        })
    }
}

/// Read and validate the session cookie, if any.
///
/// Shared with handlers that only branch on authentication (the login page
/// redirects an already-authenticated admin to the dashboard).
pub fn admin_session_from_headers(headers: &HeaderMap, state: &AppState) -> Option<AdminSession> {
    let header = headers.get(COOKIE)?.to_str().ok()?;
    let token = session::token_from_cookie_header(header)?;
    let claims = validate_token(token, &state.config.session).ok()?;
    Some(AdminSession {
        username: claims.sub,
    })
}

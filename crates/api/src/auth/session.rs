//! Signed admin session tokens carried in an HttpOnly cookie.
//!
//! The session is a short-lived HS256 token: the cookie only ever asserts
//! "an administrator authenticated recently", signed with a secret that
//! must be supplied from the environment. Validating the signature at the
//! boundary of every admin operation is the capability check; there is no
//! server-side session table.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "intake_session";

/// Session token configuration (signing secret and lifetime).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC signing secret. Required from the environment; no default.
    pub secret: String,
    /// Session lifetime in minutes.
    pub ttl_mins: i64,
}

impl SessionConfig {
    /// Load from `SESSION_SECRET` (required) and `SESSION_TTL_MINS`
    /// (default 120).
    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_SECRET")
            .expect("SESSION_SECRET must be set; sessions cannot use a default signing key");

        let ttl_mins: i64 = std::env::var("SESSION_TTL_MINS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("SESSION_TTL_MINS must be a valid i64");

        Self { secret, ttl_mins }
    }
}

/// Claims embedded in the session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The authenticated admin's username.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issue a session token for an authenticated administrator.
pub fn issue_token(
    username: &str,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = SessionClaims {
        sub: username.to_string(),
        exp: (Utc::now() + Duration::minutes(config.ttl_mins)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a session token, returning its claims.
///
/// Fails on a bad signature, malformed token, or expired session.
pub fn validate_token(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// `Set-Cookie` value that installs the session cookie.
pub fn session_cookie(token: &str, config: &SessionConfig) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.ttl_mins * 60
    )
}

/// `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extract the session cookie value from a `Cookie` request header.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

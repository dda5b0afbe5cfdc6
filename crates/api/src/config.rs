use std::path::PathBuf;

use crate::auth::session::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// Operational knobs have defaults suitable for local development. The two
/// secrets (session signing key and admin credential hash) have no defaults
/// and must be supplied, so a deployment can never fall back to a baked-in
/// value.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Directory attachments are written to (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Admin login name (default: `admin`).
    pub admin_username: String,
    /// Argon2id PHC hash of the admin password. Never plaintext.
    pub admin_password_hash: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session token configuration (signing secret, TTL).
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var               | Default    |
    /// |-----------------------|------------|
    /// | `HOST`                | `0.0.0.0`  |
    /// | `PORT`                | `8000`     |
    /// | `UPLOAD_DIR`          | `uploads`  |
    /// | `ADMIN_USERNAME`      | `admin`    |
    /// | `ADMIN_PASSWORD_HASH` | *required* |
    /// | `REQUEST_TIMEOUT_SECS`| `30`       |
    /// | `SESSION_SECRET`      | *required* |
    /// | `SESSION_TTL_MINS`    | `120`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()));

        let admin_username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());

        let admin_password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .expect("ADMIN_PASSWORD_HASH must be set (Argon2id PHC string)");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session = SessionConfig::from_env();

        Self {
            host,
            port,
            upload_dir,
            admin_username,
            admin_password_hash,
            request_timeout_secs,
            session,
        }
    }
}

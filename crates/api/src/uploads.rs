//! Filesystem store for submission attachments.

use std::path::{Path, PathBuf};

use chrono::Utc;

use intake_core::attachment;

use crate::error::{AppError, AppResult};

/// Writes attachments under a fixed directory using sanitized,
/// timestamp-prefixed names.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the upload directory if it does not exist. Called once at
    /// startup.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Absolute path of a stored attachment.
    pub fn path_of(&self, stored_name: &str) -> PathBuf {
        self.dir.join(stored_name)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate and persist an uploaded file, returning the stored filename
    /// (never an absolute path; the directory is implied).
    ///
    /// The extension allow-list is checked first; nothing touches disk for
    /// a rejected file. The write must succeed before the caller commits a
    /// database record referencing the name.
    pub async fn save(&self, original_filename: &str, data: &[u8]) -> AppResult<String> {
        attachment::check_allowed(original_filename)?;

        let stored = attachment::stored_name(Utc::now().naive_utc(), original_filename);
        tokio::fs::write(self.dir.join(&stored), data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store attachment: {e}")))?;

        tracing::debug!(stored = %stored, bytes = data.len(), "Stored attachment");
        Ok(stored)
    }

    /// Best-effort removal of a stored attachment. A file that is already
    /// gone is not an error.
    pub async fn remove(&self, stored_name: &str) {
        if let Err(e) = tokio::fs::remove_file(self.dir.join(stored_name)).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(stored = %stored_name, error = %e, "Failed to remove attachment");
            }
        }
    }
}

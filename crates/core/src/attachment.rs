//! Attachment filename rules: extension allow-list, sanitization, and
//! collision-avoiding stored names.
//!
//! Uploads sharing an original name are disambiguated with a
//! `YYYYMMDD_HHMMSS_` prefix. Two uploads of the same filename within the
//! same second can still collide; an accepted risk for this service, not
//! a guaranteed invariant.

use chrono::NaiveDateTime;

use crate::error::CoreError;

/// File extensions accepted for upload, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 8] =
    ["pdf", "doc", "docx", "png", "jpg", "jpeg", "zip", "txt"];

/// Ceiling on the total request body, including the uploaded file.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Extract the lowercased extension (substring after the last `.`).
///
/// Returns `None` for filenames without a dot or ending in one.
pub fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check the original filename against the allow-list.
///
/// A missing extension fails the same way as a disallowed one.
pub fn check_allowed(filename: &str) -> Result<(), CoreError> {
    match extension(filename) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(CoreError::UnsupportedFileType(format!(
            "File type not allowed. Allowed: {}",
            ALLOWED_EXTENSIONS.join(", ")
        ))),
    }
}

/// Strip path components and unsafe characters from an untrusted filename.
///
/// Only ASCII alphanumerics, `.`, `-`, and `_` survive; everything else
/// becomes `_`. Leading dots are dropped so the result can never be a
/// hidden file or a traversal fragment. An empty result falls back to
/// `"file"`.
pub fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

/// Build the stored filename: timestamp prefix + sanitized original name.
pub fn stored_name(now: NaiveDateTime, original: &str) -> String {
    format!(
        "{}_{}",
        now.format("%Y%m%d_%H%M%S"),
        sanitize_filename(original)
    )
}

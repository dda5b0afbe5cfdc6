//! Shared primitive type aliases.

/// Internal database identifier (SQLite rowid).
pub type DbId = i64;

/// Timestamp as stored by SQLite's `datetime('now')` (UTC, second resolution).
pub type Timestamp = chrono::NaiveDateTime;

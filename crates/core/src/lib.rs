//! Domain logic for the project intake service.
//!
//! Pure types and rules with no I/O: submission validation, attachment
//! filename handling, the status enum, pagination math, and the shared
//! error type. The `db` and `api` crates build on these.

pub mod attachment;
pub mod error;
pub mod pagination;
pub mod status;
pub mod submission;
pub mod types;

pub use error::CoreError;
pub use status::ProjectStatus;

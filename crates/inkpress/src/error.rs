//! Error types for the facade crate.

use inkpress_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the fallible edges of the data layer.
///
/// The CRUD surface itself never raises; these come from opening a
/// backend and from settings import.
#[derive(Debug, Error)]
pub enum CmsError {
    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A settings document that could not be parsed.
    #[error("invalid settings document: {0}")]
    InvalidSettings(#[source] serde_json::Error),
}

/// Result type for fallible Cms operations.
pub type Result<T> = std::result::Result<T, CmsError>;

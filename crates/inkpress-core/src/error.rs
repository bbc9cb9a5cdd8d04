//! Error types for the core data model.

use thiserror::Error;

/// Draft validation failures.
///
/// Raised by the form-level validators in [`crate::validation`], never by
/// store mutations themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be blank")]
    BlankTitle,

    #[error("author must not be blank")]
    BlankAuthor,

    #[error("content must not be blank")]
    BlankContent,

    #[error("comment must reference a post")]
    MissingPostId,

    #[error("name must not be blank")]
    BlankName,

    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("invalid color: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
}

//! Draft validation: the field checks the admin forms apply before
//! handing a draft to a store.
//!
//! Store mutations never raise; callers run these checks first and keep
//! invalid drafts out of the collection.

use crate::category::CategoryDraft;
use crate::comment::CommentDraft;
use crate::error::ValidationError;
use crate::post::PostDraft;

/// Validate a post draft.
///
/// Title and author are required; content may be empty (drafts are often
/// saved before anything is written).
pub fn validate_post_draft(draft: &PostDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::BlankTitle);
    }
    if draft.author.trim().is_empty() {
        return Err(ValidationError::BlankAuthor);
    }
    Ok(())
}

/// Validate a comment draft.
pub fn validate_comment_draft(draft: &CommentDraft) -> Result<(), ValidationError> {
    if draft.post_id.as_str().is_empty() {
        return Err(ValidationError::MissingPostId);
    }
    if draft.author.trim().is_empty() {
        return Err(ValidationError::BlankAuthor);
    }
    if draft.content.trim().is_empty() {
        return Err(ValidationError::BlankContent);
    }
    Ok(())
}

/// Validate a category draft.
pub fn validate_category_draft(draft: &CategoryDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    if !is_valid_slug(&draft.slug) {
        return Err(ValidationError::InvalidSlug(draft.slug.clone()));
    }
    if !is_valid_color(&draft.color) {
        return Err(ValidationError::InvalidColor(draft.color.clone()));
    }
    Ok(())
}

/// A valid slug is non-empty, lowercase alphanumeric with single hyphens,
/// and does not start or end with a hyphen.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// A valid color is `#` followed by six hex digits.
pub fn is_valid_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

//! Derived dashboard queries.
//!
//! The dashboard reads all three entity stores independently; there is no
//! cross-store transaction, and referential fields are resolved here on
//! the consuming side.

use std::collections::HashMap;

use inkpress_core::{CategoryStatus, CommentStatus, EntityId, PostStatus};

use crate::categories::CategoryStore;
use crate::comments::CommentStore;
use crate::posts::PostStore;

/// Point-in-time counters for the dashboard header cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
    pub total_comments: usize,
    pub pending_comments: usize,
    pub approved_comments: usize,
    pub rejected_comments: usize,
    pub total_categories: usize,
    pub active_categories: usize,
}

impl DashboardStats {
    /// Compute the counters from the current store contents.
    pub fn collect(
        posts: &PostStore,
        comments: &CommentStore,
        categories: &CategoryStore,
    ) -> Self {
        Self {
            total_posts: posts.len(),
            published_posts: posts.by_status(PostStatus::Published).len(),
            draft_posts: posts.by_status(PostStatus::Draft).len(),
            total_comments: comments.len(),
            pending_comments: comments.by_status(CommentStatus::Pending).len(),
            approved_comments: comments.by_status(CommentStatus::Approved).len(),
            rejected_comments: comments.by_status(CommentStatus::Rejected).len(),
            total_categories: categories.len(),
            active_categories: categories.by_status(CategoryStatus::Active).len(),
        }
    }
}

/// Post-id to title map for resolving comment references in list views.
///
/// Ids with no matching post are simply absent; "Unknown Post" rendering
/// is the consumer's choice.
pub fn post_title_index(posts: &PostStore) -> HashMap<EntityId, String> {
    posts
        .list()
        .into_iter()
        .map(|p| (p.id, p.title))
        .collect()
}

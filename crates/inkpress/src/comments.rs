//! The comments store.

use std::sync::Arc;

use inkpress_core::{Comment, CommentDraft, CommentStatus, EntityId};
use inkpress_store::Backend;

use crate::collection::EntityStore;
use crate::seed;

/// Store for reader comments.
pub struct CommentStore {
    inner: EntityStore<Comment>,
}

impl CommentStore {
    /// Persistence slot key for the comments collection.
    pub const SLOT_KEY: &'static str = "blog-cms-comments";

    /// Hydrate from the backend, seeding with the default comments when
    /// nothing usable is persisted.
    pub fn hydrate(backend: Arc<dyn Backend>) -> Self {
        Self {
            inner: EntityStore::hydrate(backend, Self::SLOT_KEY, seed::comments),
        }
    }

    /// All comments, newest-created first.
    pub fn list(&self) -> Vec<Comment> {
        self.inner.list()
    }

    /// Look up a comment by id.
    pub fn get(&self, id: &EntityId) -> Option<Comment> {
        self.inner.get(id)
    }

    /// Create a comment. New comments carry the creation-time timestamp.
    pub fn add(&self, draft: CommentDraft) -> Comment {
        self.inner.add(draft)
    }

    /// Update a comment's editable fields. Unknown ids are ignored.
    pub fn update(&self, id: &EntityId, draft: CommentDraft) {
        self.inner.update(id, draft)
    }

    /// Delete a comment. Unknown ids are ignored.
    pub fn remove(&self, id: &EntityId) {
        self.inner.remove(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Comments belonging to one post, in collection order.
    ///
    /// The reference is not validated against the posts collection - a
    /// post id nothing references yields an empty list.
    pub fn by_post(&self, post_id: &EntityId) -> Vec<Comment> {
        self.inner.filtered(|c| &c.post_id == post_id)
    }

    /// Comments with the given moderation status, in collection order.
    pub fn by_status(&self, status: CommentStatus) -> Vec<Comment> {
        self.inner.filtered(|c| c.status == status)
    }

    /// Set just the moderation status, leaving everything else alone.
    /// Unknown ids are ignored.
    pub fn set_status(&self, id: &EntityId, status: CommentStatus) {
        self.inner.modify(id, |c| c.status = status);
    }

    /// The `n` most recent comments by creation time.
    pub fn recent(&self, n: usize) -> Vec<Comment> {
        let mut comments = self.list();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments.truncate(n);
        comments
    }
}

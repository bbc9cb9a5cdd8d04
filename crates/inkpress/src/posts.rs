//! The posts store.

use std::sync::Arc;

use inkpress_core::{EntityId, Post, PostDraft, PostStatus};
use inkpress_store::Backend;

use crate::collection::EntityStore;
use crate::seed;

/// Store for blog posts.
pub struct PostStore {
    inner: EntityStore<Post>,
}

impl PostStore {
    /// Persistence slot key for the posts collection.
    pub const SLOT_KEY: &'static str = "blog-cms-posts";

    /// Hydrate from the backend, seeding with the default posts when
    /// nothing usable is persisted.
    pub fn hydrate(backend: Arc<dyn Backend>) -> Self {
        Self {
            inner: EntityStore::hydrate(backend, Self::SLOT_KEY, seed::posts),
        }
    }

    /// All posts, newest-created first.
    pub fn list(&self) -> Vec<Post> {
        self.inner.list()
    }

    /// Look up a post by id.
    pub fn get(&self, id: &EntityId) -> Option<Post> {
        self.inner.get(id)
    }

    /// Create a post. The publication date is stamped at creation and
    /// never changed by updates.
    pub fn add(&self, draft: PostDraft) -> Post {
        self.inner.add(draft)
    }

    /// Update a post's editable fields. Unknown ids are ignored.
    pub fn update(&self, id: &EntityId, draft: PostDraft) {
        self.inner.update(id, draft)
    }

    /// Delete a post. Unknown ids are ignored.
    pub fn remove(&self, id: &EntityId) {
        self.inner.remove(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Posts with the given status, in collection order.
    pub fn by_status(&self, status: PostStatus) -> Vec<Post> {
        self.inner.filtered(|p| p.status == status)
    }

    /// The `n` most recent posts by publication date.
    pub fn recent(&self, n: usize) -> Vec<Post> {
        let mut posts = self.list();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts.truncate(n);
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpress_store::MemoryBackend;

    fn store() -> PostStore {
        PostStore::hydrate(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn test_seeds_three_posts() {
        assert_eq!(store().len(), 3);
    }

    #[test]
    fn test_add_to_seeded_store() {
        let posts = store();

        posts.add(PostDraft {
            title: "X".into(),
            content: "Y".into(),
            author: "A".into(),
            status: PostStatus::Draft,
        });

        let listed = posts.list();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[0].title, "X");
        assert_eq!(listed[0].status, PostStatus::Draft);
    }

    #[test]
    fn test_remove_seed_post() {
        let posts = store();

        posts.remove(&EntityId::new("2"));

        let listed = posts.list();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|p| p.id != EntityId::new("2")));
    }

    #[test]
    fn test_by_status_on_seed() {
        let posts = store();
        assert_eq!(posts.by_status(PostStatus::Published).len(), 2);
        assert_eq!(posts.by_status(PostStatus::Draft).len(), 1);
    }

    #[test]
    fn test_recent_orders_by_date() {
        let posts = store();

        let recent = posts.recent(2);
        assert_eq!(recent.len(), 2);
        // Seed dates: post 1 = 07-14, post 3 = 07-12, post 2 = 07-10.
        assert_eq!(recent[0].id, EntityId::new("1"));
        assert_eq!(recent[1].id, EntityId::new("3"));
    }

    #[test]
    fn test_update_does_not_touch_date() {
        let posts = store();
        let before = posts.get(&EntityId::new("1")).unwrap();

        posts.update(
            &EntityId::new("1"),
            PostDraft {
                title: "Retitled".into(),
                content: before.content.clone(),
                author: before.author.clone(),
                status: PostStatus::Draft,
            },
        );

        let after = posts.get(&EntityId::new("1")).unwrap();
        assert_eq!(after.date, before.date);
        assert_eq!(after.title, "Retitled");
    }
}

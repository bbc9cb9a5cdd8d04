//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use inkpress::{Cms, CategoryStore, CommentStore, PostStore};
use inkpress_core::{
    slugify, CategoryDraft, CategoryStatus, CommentDraft, CommentStatus, EntityId, PostDraft,
    PostStatus,
};
use inkpress_store::{Backend, MemoryBackend};

/// A seeded Cms over an in-memory backend, with the backend kept around
/// so tests can rehydrate or inspect raw slot values.
pub struct TestFixture {
    pub backend: Arc<MemoryBackend>,
    pub cms: Cms,
}

impl TestFixture {
    /// Seeded stores over a fresh in-memory backend.
    pub fn new() -> Self {
        let backend = Arc::new(MemoryBackend::new());
        let cms = Cms::with_backend(backend.clone());
        Self { backend, cms }
    }

    /// Stores hydrated from empty collections rather than the seeds.
    pub fn empty() -> Self {
        let backend = Arc::new(MemoryBackend::new());
        for key in [
            PostStore::SLOT_KEY,
            CommentStore::SLOT_KEY,
            CategoryStore::SLOT_KEY,
        ] {
            backend.write(key, "[]").expect("memory backend write");
        }
        let cms = Cms::with_backend(backend.clone());
        Self { backend, cms }
    }

    /// Hydrate a second Cms over the same backend, as a new session
    /// would.
    pub fn reopen(&self) -> Cms {
        Cms::with_backend(self.backend.clone())
    }

    /// The raw slot value currently persisted under `key`, if any.
    pub fn raw_slot(&self, key: &str) -> Option<String> {
        self.backend.read(key).expect("memory backend read")
    }

    /// A minimal valid post draft.
    pub fn post_draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            content: format!("Body of {title}."),
            author: "Test Author".into(),
            status: PostStatus::Draft,
        }
    }

    /// A minimal valid comment draft referencing `post_id`.
    pub fn comment_draft(post_id: &str) -> CommentDraft {
        CommentDraft {
            post_id: EntityId::new(post_id),
            author: "Test Reader".into(),
            content: "A test comment.".into(),
            status: CommentStatus::Pending,
        }
    }

    /// A minimal valid category draft, slug derived from the name.
    pub fn category_draft(name: &str) -> CategoryDraft {
        CategoryDraft {
            name: name.into(),
            description: format!("About {name}."),
            slug: slugify(name),
            color: "#3B82F6".into(),
            status: CategoryStatus::Active,
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_is_seeded() {
        let fixture = TestFixture::new();
        assert_eq!(fixture.cms.posts.len(), 3);
        assert_eq!(fixture.cms.comments.len(), 7);
        assert_eq!(fixture.cms.categories.len(), 6);
    }

    #[test]
    fn test_empty_fixture_has_no_records() {
        let fixture = TestFixture::empty();
        assert!(fixture.cms.posts.is_empty());
        assert!(fixture.cms.comments.is_empty());
        assert!(fixture.cms.categories.is_empty());
    }

    #[test]
    fn test_reopen_sees_mutations() {
        let fixture = TestFixture::new();
        fixture
            .cms
            .posts
            .add(TestFixture::post_draft("Visible after reopen"));

        let reopened = fixture.reopen();
        assert_eq!(reopened.posts.len(), 4);
    }

    #[test]
    fn test_raw_slot_exposes_persisted_json() {
        let fixture = TestFixture::new();
        fixture.cms.posts.remove(&EntityId::new("1"));

        let raw = fixture.raw_slot(PostStore::SLOT_KEY).unwrap();
        assert!(raw.starts_with('['));
        assert!(!raw.contains("\"id\":\"1\""));
    }

    #[test]
    fn test_category_draft_slug_is_derived() {
        let draft = TestFixture::category_draft("CSS & Styling");
        assert_eq!(draft.slug, "css-styling");
    }
}

//! The Cms aggregate: every store wired to one shared backend.
//!
//! Stores have an explicit lifetime and are handed to consumers by
//! reference; any screen that can see the `Cms` can read and write every
//! store without an ambient global.

use std::path::Path;
use std::sync::Arc;

use inkpress_store::{Backend, MemoryBackend, NullBackend, SqliteBackend};

use crate::categories::CategoryStore;
use crate::comments::CommentStore;
use crate::error::Result;
use crate::posts::PostStore;
use crate::settings::SettingsStore;

/// The assembled data layer: posts, comments, categories, and settings
/// over one backend.
pub struct Cms {
    pub posts: PostStore,
    pub comments: CommentStore,
    pub categories: CategoryStore,
    pub settings: SettingsStore,
}

impl Cms {
    /// Open durable storage at the given path and hydrate every store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_backend(Arc::new(SqliteBackend::open(path)?)))
    }

    /// Open an in-memory SQLite database. Useful for testing the durable
    /// path without touching disk.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::with_backend(Arc::new(SqliteBackend::open_memory()?)))
    }

    /// Session-only storage: mutations survive for the life of this Cms
    /// and no longer.
    pub fn session() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()))
    }

    /// No storage at all: every store hydrates from its seed and writes
    /// go nowhere.
    pub fn detached() -> Self {
        Self::with_backend(Arc::new(NullBackend::new()))
    }

    /// Hydrate every store from the given backend.
    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self {
            posts: PostStore::hydrate(backend.clone()),
            comments: CommentStore::hydrate(backend.clone()),
            categories: CategoryStore::hydrate(backend.clone()),
            settings: SettingsStore::hydrate(backend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpress_core::{EntityId, PostDraft, PostStatus};

    #[test]
    fn test_session_cms_seeds_everything() {
        let cms = Cms::session();
        assert_eq!(cms.posts.len(), 3);
        assert_eq!(cms.comments.len(), 7);
        assert_eq!(cms.categories.len(), 6);
    }

    #[test]
    fn test_stores_share_one_backend() {
        let backend = Arc::new(MemoryBackend::new());
        let cms = Cms::with_backend(backend.clone());

        cms.posts.add(PostDraft {
            title: "Shared".into(),
            content: String::new(),
            author: "A".into(),
            status: PostStatus::Draft,
        });
        cms.comments.remove(&EntityId::new("5"));

        let reopened = Cms::with_backend(backend);
        assert_eq!(reopened.posts.len(), 4);
        assert_eq!(reopened.comments.len(), 6);
    }

    #[test]
    fn test_detached_cms_works_without_storage() {
        let cms = Cms::detached();
        cms.posts.remove(&EntityId::new("1"));
        assert_eq!(cms.posts.len(), 2);

        // A fresh detached Cms starts from the seed again.
        assert_eq!(Cms::detached().posts.len(), 3);
    }
}

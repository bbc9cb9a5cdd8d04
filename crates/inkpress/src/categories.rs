//! The categories store.

use std::sync::Arc;

use inkpress_core::{Category, CategoryDraft, CategoryStatus, EntityId};
use inkpress_store::Backend;

use crate::collection::EntityStore;
use crate::seed;

/// Store for post categories.
pub struct CategoryStore {
    inner: EntityStore<Category>,
}

impl CategoryStore {
    /// Persistence slot key for the categories collection.
    pub const SLOT_KEY: &'static str = "blog-cms-categories";

    /// Hydrate from the backend, seeding with the default categories when
    /// nothing usable is persisted.
    pub fn hydrate(backend: Arc<dyn Backend>) -> Self {
        Self {
            inner: EntityStore::hydrate(backend, Self::SLOT_KEY, seed::categories),
        }
    }

    /// All categories, newest-created first.
    pub fn list(&self) -> Vec<Category> {
        self.inner.list()
    }

    /// Look up a category by id.
    pub fn get(&self, id: &EntityId) -> Option<Category> {
        self.inner.get(id)
    }

    /// Create a category. New categories start with a post count of zero.
    pub fn add(&self, draft: CategoryDraft) -> Category {
        self.inner.add(draft)
    }

    /// Update a category's editable fields. The post count is carried
    /// over unchanged. Unknown ids are ignored.
    pub fn update(&self, id: &EntityId, draft: CategoryDraft) {
        self.inner.update(id, draft)
    }

    /// Delete a category. Unknown ids are ignored.
    pub fn remove(&self, id: &EntityId) {
        self.inner.remove(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Look up a category by slug.
    ///
    /// Slugs are intended to be unique but not enforced; the first match
    /// in collection order wins.
    pub fn by_slug(&self, slug: &str) -> Option<Category> {
        self.list().into_iter().find(|c| c.slug == slug)
    }

    /// Categories with the given status, in collection order.
    pub fn by_status(&self, status: CategoryStatus) -> Vec<Category> {
        self.inner.filtered(|c| c.status == status)
    }

    /// Set just the status, leaving everything else alone. Unknown ids
    /// are ignored.
    pub fn set_status(&self, id: &EntityId, status: CategoryStatus) {
        self.inner.modify(id, |c| c.status = status);
    }
}

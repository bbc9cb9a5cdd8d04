//! The generic entity store: one ordered collection, mirrored into its
//! persistence slot on every mutation.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use inkpress_core::{Entity, EntityId};
use inkpress_store::{slot, Backend};

/// An in-memory collection of one entity kind, newest-created first,
/// persisted whole after each mutation.
///
/// Shared by reference across admin screens; all methods take `&self`.
/// The CRUD surface is deliberately infallible: unknown ids are silent
/// no-ops and persistence is best-effort (see [`slot::save`]).
pub struct EntityStore<T: Entity> {
    backend: Arc<dyn Backend>,
    key: &'static str,
    records: RwLock<Vec<T>>,
}

impl<T: Entity> EntityStore<T> {
    /// Hydrate a store from its slot, seeding when nothing usable is
    /// persisted.
    pub fn hydrate<F>(backend: Arc<dyn Backend>, key: &'static str, seed: F) -> Self
    where
        F: FnOnce() -> Vec<T>,
    {
        let records = slot::load(backend.as_ref(), key, seed);
        Self {
            backend,
            key,
            records: RwLock::new(records),
        }
    }

    /// Snapshot of the collection, newest-created first. No side effects.
    pub fn list(&self) -> Vec<T> {
        self.records.read().unwrap().clone()
    }

    /// Linear lookup by id.
    pub fn get(&self, id: &EntityId) -> Option<T> {
        self.records
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// Create a record from a draft: fresh id, creation time stamped now,
    /// prepended so the newest record is first. Returns the created
    /// record.
    pub fn add(&self, draft: T::Draft) -> T {
        let record = T::create(EntityId::generate(), Utc::now(), draft);

        let mut records = self.records.write().unwrap();
        records.insert(0, record.clone());
        self.persist(&records);

        record
    }

    /// Shallow-merge a draft over the record with the given id, keeping
    /// id and creation timestamp. Silent no-op when the id is absent.
    pub fn update(&self, id: &EntityId, draft: T::Draft) {
        self.modify(id, |record| record.merge(draft));
    }

    /// Remove the record with the given id. Silent no-op when absent.
    pub fn remove(&self, id: &EntityId) {
        let mut records = self.records.write().unwrap();
        records.retain(|r| r.id() != id);
        self.persist(&records);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// True when the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run a filter over the collection, cloning the matches.
    pub(crate) fn filtered(&self, mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
        self.records
            .read()
            .unwrap()
            .iter()
            .filter(|r| keep(r))
            .cloned()
            .collect()
    }

    /// Apply an in-place edit to the record with the given id, then
    /// persist. Silent no-op when the id is absent.
    pub(crate) fn modify(&self, id: &EntityId, edit: impl FnOnce(&mut T)) {
        let mut records = self.records.write().unwrap();

        match records.iter_mut().find(|r| r.id() == id) {
            Some(record) => edit(record),
            None => {
                tracing::debug!(kind = T::KIND, id = %id, "mutation for unknown id ignored");
                return;
            }
        }

        self.persist(&records);
    }

    fn persist(&self, records: &[T]) {
        slot::save(self.backend.as_ref(), self.key, records);
    }
}

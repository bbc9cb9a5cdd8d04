//! The Entity trait: the seam between the generic store and the three
//! entity kinds.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::EntityId;

/// A record kind manageable by an entity store.
///
/// The store owns the generated fields (id, creation timestamp); callers
/// supply everything else through the associated `Draft`. `create` stamps a
/// new record, `merge` shallow-merges a draft over an existing one while
/// leaving id and creation timestamp untouched.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The caller-supplied fields, excluding anything the store generates.
    type Draft;

    /// Lowercase plural noun used in log messages ("posts", "comments").
    const KIND: &'static str;

    /// The record's unique id.
    fn id(&self) -> &EntityId;

    /// Build a new record from a draft, stamping id and creation time.
    fn create(id: EntityId, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Shallow-merge a draft over this record. Id and creation timestamp
    /// are preserved.
    fn merge(&mut self, draft: Self::Draft);
}

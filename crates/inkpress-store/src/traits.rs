//! Backend trait: the abstract interface for slot persistence.
//!
//! This trait lets the stores be storage-agnostic. Implementations include
//! SQLite (primary), in-memory (tests and session-only use), and a null
//! device for environments with no durable storage.

use crate::error::Result;

/// A durable key-value device holding persistence slots.
///
/// Each key addresses one slot; the value is the slot's complete
/// serialized content. All operations are synchronous local calls - the
/// design assumes a single logical writer per key and no suspension.
///
/// # Design Notes
///
/// - **Replace, don't append**: `write` overwrites the previous value; a
///   slot never accumulates history.
/// - **Absence is normal**: `read` returning `Ok(None)` means nothing has
///   been persisted yet, which callers treat as "use the seed".
pub trait Backend: Send + Sync {
    /// Read the value at `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` at `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value at `key`. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}

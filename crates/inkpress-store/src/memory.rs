//! In-memory implementation of the Backend trait.
//!
//! Same semantics as SQLite but nothing survives a drop. Used in tests and
//! for session-only stores.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::Backend;

/// In-memory backend. Thread-safe via RwLock.
pub struct MemoryBackend {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.read().unwrap().len()
    }

    /// True if no slot has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.read().unwrap();
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write().unwrap();
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.write().unwrap();
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let backend = MemoryBackend::new();
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some("v".to_owned()));
    }

    #[test]
    fn test_read_absent_key() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("missing").unwrap(), None);
    }

    #[test]
    fn test_write_replaces() {
        let backend = MemoryBackend::new();
        backend.write("k", "old").unwrap();
        backend.write("k", "new").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some("new".to_owned()));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let backend = MemoryBackend::new();
        backend.write("k", "v").unwrap();
        backend.delete("k").unwrap();
        backend.delete("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }
}

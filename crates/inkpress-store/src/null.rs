//! Null implementation of the Backend trait.
//!
//! Models an environment with no durable storage at all: every read finds
//! nothing, every write is discarded. Stores over this backend hydrate
//! from their seed and keep working purely in memory.

use crate::error::Result;
use crate::traits::Backend;

/// Backend with no storage behind it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for NullBackend {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

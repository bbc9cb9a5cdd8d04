//! Slot hydration and mirroring: the load/save contract every store goes
//! through.
//!
//! `load` never raises - a missing key, a failed read, or an undecodable
//! value all fall back to the caller's default (the seed dataset). `save`
//! is best-effort: failures are logged and swallowed, and the in-memory
//! mutation that triggered the save stands regardless.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::traits::Backend;

/// Hydrate a slot, falling back to `fallback()` when nothing usable is
/// persisted.
pub fn load<T, F>(backend: &dyn Backend, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let raw = match backend.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "slot empty, using seed");
            return fallback();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read slot, using seed");
            return fallback();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to decode slot, using seed");
            fallback()
        }
    }
}

/// Mirror a value into its slot, replacing the previous snapshot.
pub fn save<T: Serialize + ?Sized>(backend: &dyn Backend, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to encode slot value");
            return;
        }
    };

    if let Err(e) = backend.write(key, &raw) {
        tracing::warn!(key, error = %e, "failed to write slot");
    }
}

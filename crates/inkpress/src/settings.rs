//! The settings store: a single document mirrored into its own slot.

use std::sync::{Arc, RwLock};

use inkpress_core::BlogSettings;
use inkpress_store::{slot, Backend};

use crate::error::{CmsError, Result};

/// Store for the blog settings document.
///
/// Unlike the entity stores this holds exactly one record. Hydration
/// falls back to [`BlogSettings::default`] when nothing usable is
/// persisted.
pub struct SettingsStore {
    backend: Arc<dyn Backend>,
    settings: RwLock<BlogSettings>,
}

impl SettingsStore {
    /// Persistence slot key for the settings document.
    pub const SLOT_KEY: &'static str = "blogSettings";

    /// Hydrate from the backend.
    pub fn hydrate(backend: Arc<dyn Backend>) -> Self {
        let settings = slot::load(backend.as_ref(), Self::SLOT_KEY, BlogSettings::default);
        Self {
            backend,
            settings: RwLock::new(settings),
        }
    }

    /// The current settings document.
    pub fn get(&self) -> BlogSettings {
        self.settings.read().unwrap().clone()
    }

    /// Replace the settings document and persist it.
    pub fn save(&self, settings: BlogSettings) {
        let mut current = self.settings.write().unwrap();
        *current = settings;
        slot::save(self.backend.as_ref(), Self::SLOT_KEY, &*current);
    }

    /// Restore the defaults, persist, and return them.
    pub fn reset(&self) -> BlogSettings {
        let defaults = BlogSettings::default();
        self.save(defaults.clone());
        defaults
    }

    /// The current document as pretty-printed JSON, for export to a file.
    pub fn export_json(&self) -> String {
        let settings = self.settings.read().unwrap();
        match serde_json::to_string_pretty(&*settings) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode settings export");
                String::new()
            }
        }
    }

    /// Adopt a settings document from exported JSON.
    ///
    /// Fields missing from the document fall back to the defaults, so a
    /// partial export imports cleanly. An unparsable document is the one
    /// error this store surfaces.
    pub fn import_json(&self, json: &str) -> Result<BlogSettings> {
        let imported: BlogSettings =
            serde_json::from_str(json).map_err(CmsError::InvalidSettings)?;
        self.save(imported.clone());
        Ok(imported)
    }
}

//! Settings store adapters
//!
//! Provides:
//! - [`MemorySettingsStore`] - in-memory store, the reference implementation
//!   used throughout the tests
//! - [`TomlSettingsStore`] - flat string table persisted to a `.toml` file,
//!   for hosts without a settings framework of their own

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use nestide_core::prelude::*;

use crate::host::SettingsStore;

/// In-memory flat key/value store.
#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Flat key/value store persisted as a TOML table of strings.
///
/// Keys are stored verbatim, so dotted run-configuration keys become quoted
/// TOML keys. Saving truncates and rewrites the whole file.
#[derive(Debug)]
pub struct TomlSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlSettingsStore {
    /// Load the store from `path`. A missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)
                .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Write the store back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(&self.path, content)?;
        debug!("Saved settings to {:?}", self.path);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

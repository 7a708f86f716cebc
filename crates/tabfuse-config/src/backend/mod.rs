//! Persisted key/value settings storage.
//!
//! The store exchanges flat `serde_json` maps with its backend, the same
//! shape a browser host's synced storage area uses.

mod memory;
mod toml_file;


use async_trait::async_trait;
use serde_json::{Map, Value};
use tabfuse_common::ConfigError;

pub use memory::MemoryBackend;
pub use toml_file::TomlFileBackend;

/// Flat settings map keyed by persisted option name.
pub type SettingsMap = Map<String, Value>;

#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Fetch the persisted values for every key in `defaults`, falling back
    /// to the default for keys that were never stored.
    async fn get(&self, defaults: SettingsMap) -> Result<SettingsMap, ConfigError>;

    /// Persist `values`, replacing any previously stored value per key.
    async fn set(&self, values: SettingsMap) -> Result<(), ConfigError>;
}

/// Overlay `stored` on `defaults`, keeping only keys present in `defaults`.
pub(crate) fn merge_with_defaults(mut defaults: SettingsMap, stored: &SettingsMap) -> SettingsMap {
    for (key, value) in defaults.iter_mut() {
        if let Some(found) = stored.get(key) {
            *value = found.clone();
        }
    }
    defaults
}

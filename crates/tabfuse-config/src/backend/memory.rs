//! In-process settings backend.

use std::sync::Mutex;

use async_trait::async_trait;
use tabfuse_common::ConfigError;

use super::{merge_with_defaults, SettingsBackend, SettingsMap};

/// Keeps settings in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<SettingsMap>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with some values already stored.
    pub fn with_values(values: SettingsMap) -> Self {
        Self {
            values: Mutex::new(values),
        }
    }

    /// Copy of everything currently stored.
    pub fn stored(&self) -> SettingsMap {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl SettingsBackend for MemoryBackend {
    async fn get(&self, defaults: SettingsMap) -> Result<SettingsMap, ConfigError> {
        let stored = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(merge_with_defaults(defaults, &stored))
    }

    async fn set(&self, values: SettingsMap) -> Result<(), ConfigError> {
        let mut stored = self.values.lock().unwrap_or_else(|e| e.into_inner());
        stored.extend(values);
        Ok(())
    }
}

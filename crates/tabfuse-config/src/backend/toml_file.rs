//! Settings backend stored in a TOML file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tabfuse_common::ConfigError;
use tracing::info;

use super::{merge_with_defaults, SettingsBackend, SettingsMap};
use crate::toml_loader::{create_default_options, default_options_path, read_table};
use crate::toml_writer::save_table_to_path;

/// Reads and writes a flat TOML table.
///
/// If the file does not exist on first read, a commented template is
/// written and the defaults are returned.
#[derive(Debug, Clone)]
pub struct TomlFileBackend {
    path: PathBuf,
}

impl TomlFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at the platform default path.
    ///
    /// On macOS: `~/Library/Application Support/tabfuse/options.toml`
    /// On Linux: `~/.config/tabfuse/options.toml`
    pub fn at_default_path() -> Result<Self, ConfigError> {
        Ok(Self::new(default_options_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_or_create(&self) -> Result<SettingsMap, ConfigError> {
        match read_table(&self.path) {
            Ok(table) => Ok(table),
            Err(ConfigError::FileNotFound(_)) => {
                info!("no options found at {}, creating default", self.path.display());
                create_default_options(&self.path)?;
                Ok(SettingsMap::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl SettingsBackend for TomlFileBackend {
    async fn get(&self, defaults: SettingsMap) -> Result<SettingsMap, ConfigError> {
        let stored = self.read_or_create()?;
        Ok(merge_with_defaults(defaults, &stored))
    }

    async fn set(&self, values: SettingsMap) -> Result<(), ConfigError> {
        let mut table = match read_table(&self.path) {
            Ok(table) => table,
            Err(ConfigError::FileNotFound(_)) => SettingsMap::new(),
            Err(e) => return Err(e),
        };
        table.extend(values);
        save_table_to_path(&table, &self.path)
    }
}

//! TabFuse configuration store.
//!
//! Holds the consolidation policy options, loaded once from a settings
//! backend and cached for the rest of the run. All options have defaults
//! so partial settings work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tabfuse_config::{ConfigStore, TomlFileBackend};
//!
//! # async fn run() -> Result<(), tabfuse_common::ConfigError> {
//! let backend = Arc::new(TomlFileBackend::at_default_path()?);
//! let store = ConfigStore::load(backend).await?;
//! println!("{:?}", store.snapshot());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

// Re-export core types for convenience
pub use backend::{MemoryBackend, SettingsBackend, SettingsMap, TomlFileBackend};
pub use schema::{FuseOptions, OPTION_KEYS};
pub use store::ConfigStore;

/// Serialize options to a pretty-printed JSON string.
pub fn options_to_json(options: &FuseOptions) -> String {
    serde_json::to_string_pretty(options)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize options: {e}\"}}"))
}

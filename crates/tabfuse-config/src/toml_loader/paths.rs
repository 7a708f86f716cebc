//! Where the options file lives, and seeding it on first run.

use std::path::{Path, PathBuf};

use tabfuse_common::ConfigError;
use tracing::info;

use super::template::default_options_toml;
use crate::toml_writer::write_atomic;

const APP_DIR: &str = "tabfuse";
const OPTIONS_FILE: &str = "options.toml";

/// Options file location under a given config root.
pub fn options_path_in(config_root: &Path) -> PathBuf {
    config_root.join(APP_DIR).join(OPTIONS_FILE)
}

/// `<os config dir>/tabfuse/options.toml`.
pub fn default_options_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|root| options_path_in(&root))
        .ok_or_else(|| ConfigError::Backend("no config directory on this platform".into()))
}

/// Seed `path` with the commented template. Every key in it is commented
/// out, so reading it back yields the defaults.
pub fn create_default_options(path: &Path) -> Result<(), ConfigError> {
    write_atomic(path, &default_options_toml())?;
    info!("created default options at {}", path.display());
    Ok(())
}

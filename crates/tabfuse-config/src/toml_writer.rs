//! Write settings to TOML on disk.
//!
//! Supports atomic writes (write to `.tmp`, then rename) to prevent
//! corruption if the process crashes mid-write.

use std::path::Path;

use serde_json::{Map, Value};
use tabfuse_common::ConfigError;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Write a flat settings map to a specific path.
pub fn save_table_to_path(values: &Map<String, Value>, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(values)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize options to TOML: {e}")))?;
    write_atomic(path, &toml_str)?;
    tracing::debug!(path = %path.display(), "Options saved to disk");
    Ok(())
}

/// Replace the contents of `path`.
///
/// Creates parent directories if they don't exist. Writes a `.tmp`
/// sibling first and renames it over the target, so readers never see a
/// half-written file. I/O failures are backend errors.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let io_err = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::Backend(format!("failed to {what} {}: {e}", at.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("create directory", parent, e))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, contents).map_err(|e| io_err("write", &tmp_path, e))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename failed, fall back to a direct write (Windows)
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, contents).map_err(|e| io_err("write", path, e))?;
        let _ = std::fs::remove_file(&tmp_path);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

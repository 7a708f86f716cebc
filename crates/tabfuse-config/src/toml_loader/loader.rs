//! Core TOML options loading: read a flat key/value table from a path.

use std::path::Path;

use serde_json::{Map, Value};
use tabfuse_common::ConfigError;

/// Read a TOML file into a flat settings map.
///
/// Returns `ConfigError::FileNotFound` if the file does not exist.
pub fn read_table(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::Backend(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let table: toml::Table = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    match serde_json::to_value(table) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Ok(Map::new()),
        Err(e) => Err(ConfigError::ParseError(format!(
            "failed to convert {}: {e}",
            path.display()
        ))),
    }
}

//! Consolidation policy options.
//!
//! Field names are persisted in camelCase so that settings written by the
//! options surface and by the host's own storage share one key set.
//! Every field has a default, so a partial settings map loads cleanly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use tabfuse_common::ConfigError;

/// Persisted keys recognised by the store, in display order.
pub const OPTION_KEYS: [&str; 5] = [
    "includePanels",
    "includePopups",
    "includeApps",
    "exclude",
    "excludePattern",
];

/// Policy options read by the consolidation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuseOptions {
    /// Move tabs out of panel windows.
    pub include_panels: bool,
    /// Move tabs out of popup windows.
    pub include_popups: bool,
    /// Move tabs out of app windows.
    pub include_apps: bool,
    /// Leave tabs whose URL matches `exclude_pattern` where they are.
    pub exclude: bool,
    /// Regular expression matched against tab URLs when `exclude` is on.
    pub exclude_pattern: String,
}

impl Default for FuseOptions {
    fn default() -> Self {
        Self {
            include_panels: false,
            include_popups: false,
            include_apps: true,
            exclude: false,
            exclude_pattern: String::new(),
        }
    }
}

impl FuseOptions {
    /// Serialize into the flat key/value map exchanged with settings backends.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Build options from a settings map. Missing keys take defaults and
    /// unrecognised keys are ignored.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, ConfigError> {
        serde_json::from_value(Value::Object(map))
            .map_err(|e| ConfigError::ParseError(format!("invalid option value: {e}")))
    }

    /// Whether the exclude filter can match anything at all.
    ///
    /// An empty pattern with `exclude` on excludes nothing.
    pub fn exclusion_active(&self) -> bool {
        self.exclude && !self.exclude_pattern.is_empty()
    }
}

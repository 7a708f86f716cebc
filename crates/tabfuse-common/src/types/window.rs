use serde::{Deserialize, Serialize};

use super::core::{TabId, WindowId, WindowKind};

/// A single tab as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    pub window_id: WindowId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub active: bool,
}

/// A browser window with its tabs in host order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub id: WindowId,
    #[serde(rename = "type", default)]
    pub kind: WindowKind,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

impl Window {
    pub fn is_normal(&self) -> bool {
        self.kind == WindowKind::Normal
    }

    /// The tab currently marked active, if any.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.active)
    }
}

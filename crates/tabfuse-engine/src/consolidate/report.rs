//! Outcome of one consolidation.

use serde::Serialize;
use tabfuse_common::types::{TabId, WindowId};

/// A tab the host refused to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveFailure {
    pub tab: TabId,
    pub error: String,
}

/// What happened to the tab that was active before consolidating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "tab", rename_all = "snake_case")]
pub enum FocusOutcome {
    /// No active tab was captured, so there was nothing to restore.
    NoActiveTab,
    Restored(TabId),
    /// The host refused to focus the window or activate the tab.
    Failed(TabId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuseReport {
    pub destination: WindowId,
    /// Tabs moved into the destination, in the order they were moved.
    pub moved: Vec<TabId>,
    /// Tabs left in place because their URL matched the exclude pattern.
    pub excluded: Vec<TabId>,
    /// Windows held back by their category.
    pub skipped_windows: Vec<WindowId>,
    pub failed: Vec<MoveFailure>,
    pub focus: FocusOutcome,
}

impl FuseReport {
    pub fn new(destination: WindowId) -> Self {
        Self {
            destination,
            moved: Vec::new(),
            excluded: Vec::new(),
            skipped_windows: Vec::new(),
            failed: Vec::new(),
            focus: FocusOutcome::NoActiveTab,
        }
    }

    pub fn was_moved(&self, tab: TabId) -> bool {
        self.moved.contains(&tab)
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "moved {} tab(s) into window {}",
            self.moved.len(),
            self.destination
        );
        if !self.excluded.is_empty() {
            line.push_str(&format!(", {} excluded", self.excluded.len()));
        }
        if !self.skipped_windows.is_empty() {
            line.push_str(&format!(", {} window(s) skipped", self.skipped_windows.len()));
        }
        if !self.failed.is_empty() {
            line.push_str(&format!(", {} failed", self.failed.len()));
        }
        line
    }
}

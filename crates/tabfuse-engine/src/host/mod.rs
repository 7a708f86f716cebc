use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tabfuse_common::errors::HostError;
use tabfuse_common::types::{Tab, TabId, Window, WindowId};

pub mod simulated;

pub type Result<T> = std::result::Result<T, HostError>;

/// A named command the host knows about, with its bound shortcut.
///
/// `shortcut` is empty when the user has not assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    pub name: String,
    #[serde(default)]
    pub shortcut: String,
}

/// Host-provided window and tab management.
///
/// Every call completes asynchronously; callers await each one before
/// issuing the next.
#[async_trait]
pub trait WindowService: Send + Sync {
    /// The active tab of the most recently focused window.
    async fn active_tab(&self) -> Result<Option<Tab>>;
    /// All open windows with their tabs, in host order.
    async fn all_windows(&self) -> Result<Vec<Window>>;
    /// The most recently focused window, if any window is open.
    async fn last_focused_window(&self) -> Result<Option<Window>>;
    /// Move a tab to the end of `window`'s tab strip.
    async fn move_tab(&self, tab: TabId, window: WindowId) -> Result<()>;
    async fn focus_window(&self, window: WindowId) -> Result<()>;
    async fn activate_tab(&self, tab: TabId) -> Result<()>;
}

/// Host surface around the extension: command registry and toolbar button.
#[async_trait]
pub trait ShellService: Send + Sync {
    async fn commands(&self) -> Result<Vec<CommandInfo>>;
    async fn set_button_title(&self, title: &str) -> Result<()>;
}

//! In-memory browser host.
//!
//! Stands in for a real browser when running consolidations from the
//! command line or in tests. Mirrors the host behaviour the engine
//! relies on: moved tabs are appended, emptied windows close, focusing a
//! window makes it the last focused one, activating a tab deactivates its
//! siblings. Every command is recorded in a call log.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tabfuse_common::errors::HostError;
use tabfuse_common::types::{Tab, TabId, Window, WindowId};
use tracing::debug;

use super::{CommandInfo, Result, ShellService, WindowService};

/// Serializable browser state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSnapshot {
    #[serde(default)]
    pub windows: Vec<Window>,
    /// Defaults to the window flagged `focused`, else the first window.
    #[serde(default)]
    pub last_focused: Option<WindowId>,
    #[serde(default)]
    pub commands: Vec<CommandInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_title: Option<String>,
}

/// A command the simulated host received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "camelCase")]
pub enum HostCall {
    MoveTab { tab: TabId, window: WindowId },
    FocusWindow { window: WindowId },
    ActivateTab { tab: TabId },
    SetButtonTitle { title: String },
}

#[derive(Debug, Default)]
struct BrowserState {
    snapshot: BrowserSnapshot,
    calls: Vec<HostCall>,
    rejected_moves: HashSet<TabId>,
}

impl BrowserState {
    fn window(&self, id: WindowId) -> Option<&Window> {
        self.snapshot.windows.iter().find(|w| w.id == id)
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.snapshot.windows.iter_mut().find(|w| w.id == id)
    }

    fn locate(&self, tab: TabId) -> Option<(usize, usize)> {
        self.snapshot.windows.iter().enumerate().find_map(|(wi, w)| {
            w.tabs.iter().position(|t| t.id == tab).map(|ti| (wi, ti))
        })
    }
}

/// Thread-safe in-memory implementation of the host services.
#[derive(Debug, Default)]
pub struct SimulatedBrowser {
    state: Mutex<BrowserState>,
}

impl SimulatedBrowser {
    pub fn new(mut snapshot: BrowserSnapshot) -> Self {
        if snapshot.last_focused.is_none() {
            snapshot.last_focused = snapshot
                .windows
                .iter()
                .find(|w| w.focused)
                .or_else(|| snapshot.windows.first())
                .map(|w| w.id);
        }
        let focused = snapshot.last_focused;
        for window in &mut snapshot.windows {
            window.focused = Some(window.id) == focused;
        }
        Self {
            state: Mutex::new(BrowserState {
                snapshot,
                ..Default::default()
            }),
        }
    }

    /// Parse a JSON snapshot.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    fn lock(&self) -> MutexGuard<'_, BrowserState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make the host reject any attempt to move `tab`.
    pub fn reject_moves_of(&self, tab: TabId) {
        self.lock().rejected_moves.insert(tab);
    }

    /// Current browser state.
    pub fn snapshot(&self) -> BrowserSnapshot {
        self.lock().snapshot.clone()
    }

    pub fn window(&self, id: WindowId) -> Option<Window> {
        self.lock().window(id).cloned()
    }

    pub fn last_focused(&self) -> Option<WindowId> {
        self.lock().snapshot.last_focused
    }

    /// Every command received so far, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.lock().calls.clone()
    }

    pub fn move_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, HostCall::MoveTab { .. }))
            .count()
    }

    pub fn button_title(&self) -> Option<String> {
        self.lock().snapshot.button_title.clone()
    }
}

#[async_trait]
impl WindowService for SimulatedBrowser {
    async fn active_tab(&self) -> Result<Option<Tab>> {
        let state = self.lock();
        let tab = state
            .snapshot
            .last_focused
            .and_then(|id| state.window(id))
            .and_then(|w| w.active_tab())
            .cloned();
        Ok(tab)
    }

    async fn all_windows(&self) -> Result<Vec<Window>> {
        Ok(self.lock().snapshot.windows.clone())
    }

    async fn last_focused_window(&self) -> Result<Option<Window>> {
        let state = self.lock();
        Ok(state
            .snapshot
            .last_focused
            .and_then(|id| state.window(id))
            .cloned())
    }

    async fn move_tab(&self, tab: TabId, window: WindowId) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(HostCall::MoveTab { tab, window });

        if state.rejected_moves.contains(&tab) {
            return Err(HostError::Rejected(format!("tab {tab} cannot be moved")));
        }
        if state.window(window).is_none() {
            return Err(HostError::NoSuchWindow(window));
        }
        let (wi, ti) = state.locate(tab).ok_or(HostError::NoSuchTab(tab))?;

        let source = &mut state.snapshot.windows[wi];
        let mut moved = source.tabs.remove(ti);
        if moved.active {
            let next = ti.min(source.tabs.len().saturating_sub(1));
            if let Some(next) = source.tabs.get_mut(next) {
                next.active = true;
            }
        }
        let source_id = source.id;
        let source_empty = source.tabs.is_empty();

        let Some(dest) = state.window_mut(window) else {
            return Err(HostError::NoSuchWindow(window));
        };
        moved.window_id = window;
        moved.active = dest.tabs.is_empty();
        dest.tabs.push(moved);

        if source_empty && source_id != window {
            debug!(window = %source_id, "closing emptied window");
            state.snapshot.windows.retain(|w| w.id != source_id);
            if state.snapshot.last_focused == Some(source_id) {
                state.snapshot.last_focused = None;
            }
        }
        Ok(())
    }

    async fn focus_window(&self, window: WindowId) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(HostCall::FocusWindow { window });

        if state.window(window).is_none() {
            return Err(HostError::NoSuchWindow(window));
        }
        for w in &mut state.snapshot.windows {
            w.focused = w.id == window;
        }
        state.snapshot.last_focused = Some(window);
        Ok(())
    }

    async fn activate_tab(&self, tab: TabId) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(HostCall::ActivateTab { tab });

        let (wi, ti) = state.locate(tab).ok_or(HostError::NoSuchTab(tab))?;
        for (i, t) in state.snapshot.windows[wi].tabs.iter_mut().enumerate() {
            t.active = i == ti;
        }
        Ok(())
    }
}

#[async_trait]
impl ShellService for SimulatedBrowser {
    async fn commands(&self) -> Result<Vec<CommandInfo>> {
        Ok(self.lock().snapshot.commands.clone())
    }

    async fn set_button_title(&self, title: &str) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(HostCall::SetButtonTitle {
            title: title.to_string(),
        });
        state.snapshot.button_title = Some(title.to_string());
        Ok(())
    }
}

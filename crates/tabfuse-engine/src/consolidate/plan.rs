//! Pure move planning: which tabs go where, in which order.

use tabfuse_common::types::{TabId, Window, WindowId};
use tabfuse_config::FuseOptions;

use crate::policy::{window_is_movable, TabFilter};

/// Ordered list of tabs to move, plus what was held back.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub moves: Vec<TabId>,
    pub excluded: Vec<TabId>,
    pub skipped_windows: Vec<WindowId>,
}

/// Walk windows in host order, tab by tab, skipping the destination.
pub fn plan_moves(
    windows: &[Window],
    destination: WindowId,
    options: &FuseOptions,
    filter: &TabFilter,
) -> MovePlan {
    let mut plan = MovePlan::default();

    for window in windows.iter().filter(|w| w.id != destination) {
        if !window_is_movable(window, options) {
            plan.skipped_windows.push(window.id);
            continue;
        }
        for tab in &window.tabs {
            if filter.allows(tab) {
                plan.moves.push(tab.id);
            } else {
                plan.excluded.push(tab.id);
            }
        }
    }

    plan
}

/// First normal window in host order.
pub fn first_normal_window(windows: &[Window]) -> Option<&Window> {
    windows.iter().find(|w| w.is_normal())
}

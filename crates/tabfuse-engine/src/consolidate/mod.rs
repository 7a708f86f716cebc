//! The consolidation pipeline.
//!
//! Capture active tab → select destination → plan moves → move →
//! restore focus. Each step awaits the host before the next one starts,
//! and nothing already moved is undone if a later step fails.

mod plan;
mod report;


use std::sync::Arc;

use tabfuse_common::types::{Tab, WindowId};
use tabfuse_config::FuseOptions;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::FuseError;
use crate::host::WindowService;
use crate::policy::TabFilter;

pub use plan::{first_normal_window, plan_moves, MovePlan};
pub use report::{FocusOutcome, FuseReport, MoveFailure};

/// Runs consolidations against a host, one at a time.
pub struct Consolidator {
    host: Arc<dyn WindowService>,
    in_flight: Mutex<()>,
}

impl Consolidator {
    pub fn new(host: Arc<dyn WindowService>) -> Self {
        Self {
            host,
            in_flight: Mutex::new(()),
        }
    }

    /// Consolidate all eligible tabs into one window.
    ///
    /// `options` is the snapshot for this invocation. A call made while
    /// another is still running returns [`FuseError::AlreadyRunning`]
    /// without touching the host.
    pub async fn fuse_tabs(&self, options: &FuseOptions) -> Result<FuseReport, FuseError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("consolidation already in progress");
            return Err(FuseError::AlreadyRunning);
        };
        self.run(options).await
    }

    async fn run(&self, options: &FuseOptions) -> Result<FuseReport, FuseError> {
        let filter = TabFilter::compile(options)?;

        let active = self.capture_active_tab().await;
        let destination = self.select_destination().await?;
        info!(destination = %destination, "consolidating tabs");

        let windows = self.host.all_windows().await?;
        let plan = plan_moves(&windows, destination, options, &filter);

        let mut report = FuseReport::new(destination);
        report.excluded = plan.excluded;
        report.skipped_windows = plan.skipped_windows;

        for tab in plan.moves {
            match self.host.move_tab(tab, destination).await {
                Ok(()) => {
                    debug!(tab = %tab, "moved");
                    report.moved.push(tab);
                }
                Err(e) => {
                    warn!(tab = %tab, "move failed: {e}");
                    report.failed.push(MoveFailure {
                        tab,
                        error: e.to_string(),
                    });
                }
            }
        }

        if let Some(tab) = active {
            report.focus = self.restore_focus(&tab, &report).await;
        }

        info!("{}", report.summary());
        Ok(report)
    }

    /// The active tab before anything moves. A failed query just means
    /// there is nothing to restore afterwards.
    async fn capture_active_tab(&self) -> Option<Tab> {
        match self.host.active_tab().await {
            Ok(tab) => tab,
            Err(e) => {
                warn!("could not read active tab: {e}");
                None
            }
        }
    }

    /// The last-focused window if it is normal, else the first normal
    /// window in host order.
    async fn select_destination(&self) -> Result<WindowId, FuseError> {
        if let Some(window) = self.host.last_focused_window().await? {
            if window.is_normal() {
                return Ok(window.id);
            }
            debug!(window = %window.id, kind = %window.kind, "last focused window is not normal");
        }

        let windows = self.host.all_windows().await?;
        match first_normal_window(&windows) {
            Some(window) => Ok(window.id),
            None => {
                debug!("no normal window open");
                Err(FuseError::NoDestination)
            }
        }
    }

    /// Focus the window that now holds `tab`, then activate it.
    async fn restore_focus(&self, tab: &Tab, report: &FuseReport) -> FocusOutcome {
        let window = if report.was_moved(tab.id) {
            report.destination
        } else {
            tab.window_id
        };

        let mut restored = true;
        if let Err(e) = self.host.focus_window(window).await {
            debug!(window = %window, "focus failed: {e}");
            restored = false;
        }
        if let Err(e) = self.host.activate_tab(tab.id).await {
            debug!(tab = %tab.id, "activate failed: {e}");
            restored = false;
        }

        if restored {
            FocusOutcome::Restored(tab.id)
        } else {
            FocusOutcome::Failed(tab.id)
        }
    }
}

//! TabFuseApp struct definition.

use std::sync::{Arc, Mutex};

use tabfuse_common::notifications::{Notification, NotificationQueue};
use tabfuse_config::ConfigStore;
use tabfuse_engine::{Consolidator, ShellService};

/// Top-level extension state. Built by [`TabFuseApp::start`].
pub struct TabFuseApp {
    pub(super) store: Arc<ConfigStore>,
    pub(super) consolidator: Consolidator,
    pub(super) shell: Arc<dyn ShellService>,
    pub(super) notifications: Mutex<NotificationQueue>,
}

impl TabFuseApp {
    pub(super) fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }

    /// Remove and return every pending user notice.
    pub fn take_notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain()
    }
}

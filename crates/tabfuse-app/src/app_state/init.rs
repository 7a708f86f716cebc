//! Startup: options first, then the button title, then triggers.

use std::sync::{Arc, Mutex};

use tabfuse_common::notifications::NotificationQueue;
use tabfuse_common::TabFuseError;
use tabfuse_config::{ConfigStore, SettingsBackend};
use tabfuse_engine::{Consolidator, ShellService, WindowService};

use super::core::TabFuseApp;

impl TabFuseApp {
    /// Load options, set the toolbar title, and return an app ready to
    /// receive triggers.
    ///
    /// Nothing can dispatch a trigger before this returns, so the options
    /// cache is always initialized when the engine reads it.
    pub async fn start(
        backend: Arc<dyn SettingsBackend>,
        windows: Arc<dyn WindowService>,
        shell: Arc<dyn ShellService>,
    ) -> Result<Self, TabFuseError> {
        let store = ConfigStore::load(backend).await?;

        let app = Self {
            store: Arc::new(store),
            consolidator: Consolidator::new(windows),
            shell,
            notifications: Mutex::new(NotificationQueue::default()),
        };

        let title = app.refresh_button_title().await;
        tracing::info!(title = %title, "TabFuse ready");
        Ok(app)
    }
}

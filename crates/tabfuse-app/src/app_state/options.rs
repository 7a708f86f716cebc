//! Options surface: shows the persisted options and writes edits back.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tabfuse_common::notifications::{Notification, NotificationQueue};
use tabfuse_common::ConfigError;
use tabfuse_config::{ConfigStore, FuseOptions, SettingsBackend};

use super::core::TabFuseApp;

/// How long the "saved!" confirmation stays visible.
const SAVED_FLASH: Duration = Duration::from_millis(750);

/// Partial edit of the options. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsUpdate {
    pub include_panels: Option<bool>,
    pub include_popups: Option<bool>,
    pub include_apps: Option<bool>,
    pub exclude: Option<bool>,
    pub exclude_pattern: Option<String>,
}

impl OptionsUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply onto `options`, returning the new value.
    pub fn apply(&self, mut options: FuseOptions) -> FuseOptions {
        if let Some(v) = self.include_panels {
            options.include_panels = v;
        }
        if let Some(v) = self.include_popups {
            options.include_popups = v;
        }
        if let Some(v) = self.include_apps {
            options.include_apps = v;
        }
        if let Some(v) = self.exclude {
            options.exclude = v;
        }
        if let Some(v) = &self.exclude_pattern {
            options.exclude_pattern = v.clone();
        }
        options
    }
}

/// The options page. Reads and writes the same store the engine uses.
pub struct OptionsPage {
    store: Arc<ConfigStore>,
    status: Mutex<NotificationQueue>,
}

impl OptionsPage {
    /// Open the page on its own store, loaded from `backend`.
    pub async fn open(backend: Arc<dyn SettingsBackend>) -> Result<Self, ConfigError> {
        let store = ConfigStore::load(backend).await?;
        Ok(Self::with_store(Arc::new(store)))
    }

    fn with_store(store: Arc<ConfigStore>) -> Self {
        Self {
            store,
            status: Mutex::new(NotificationQueue::default()),
        }
    }

    /// Values to display in the controls.
    pub fn current(&self) -> FuseOptions {
        self.store.snapshot()
    }

    /// Persist an edit. On success the status line flashes "saved!".
    pub async fn save(&self, update: &OptionsUpdate) -> Result<FuseOptions, ConfigError> {
        let options = update.apply(self.store.snapshot());
        self.store.save(options.clone()).await?;
        self.push_status(Notification::flash("saved!", SAVED_FLASH));
        Ok(options)
    }

    /// Write every option back to its default.
    pub async fn reset(&self) -> Result<FuseOptions, ConfigError> {
        let options = FuseOptions::default();
        self.store.save(options.clone()).await?;
        self.push_status(Notification::flash("saved!", SAVED_FLASH));
        Ok(options)
    }

    /// Status messages currently on screen.
    pub fn status(&self) -> Vec<String> {
        let mut status = self.status.lock().unwrap_or_else(|e| e.into_inner());
        status
            .visible()
            .into_iter()
            .map(|n| n.message.clone())
            .collect()
    }

    fn push_status(&self, notification: Notification) {
        self.status
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

impl TabFuseApp {
    /// An options page sharing this app's store, so saves are seen by the
    /// next consolidation.
    pub fn options_page(&self) -> OptionsPage {
        OptionsPage::with_store(Arc::clone(&self.store))
    }

    /// Options the next consolidation will use.
    pub fn options(&self) -> FuseOptions {
        self.store.snapshot()
    }
}

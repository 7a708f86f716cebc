//! Core config store implementation.
//!
//! The cached [`FuseOptions`] live in a [`tokio::sync::watch`] channel:
//! readers clone a complete snapshot, and a save swaps in a whole new
//! value, so nobody sees a half-applied update.

use std::sync::Arc;

use tabfuse_common::ConfigError;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::backend::SettingsBackend;
use crate::schema::FuseOptions;
use crate::validation;

/// Process-wide options cache backed by a [`SettingsBackend`].
///
/// The only way to get one is [`ConfigStore::load`], so a store in hand
/// always holds initialized options.
pub struct ConfigStore {
    backend: Arc<dyn SettingsBackend>,
    options_tx: watch::Sender<FuseOptions>,
}

impl ConfigStore {
    /// Fetch every recognised key from the backend, with defaults for
    /// missing ones, and cache the result.
    pub async fn load(backend: Arc<dyn SettingsBackend>) -> Result<Self, ConfigError> {
        let defaults = FuseOptions::default().to_map();
        let values = backend.get(defaults).await?;
        let options = FuseOptions::from_map(values)?;

        if let Err(e) = validation::validate(&options) {
            warn!("options validation warning: {e}");
        }

        info!(
            include_panels = options.include_panels,
            include_popups = options.include_popups,
            include_apps = options.include_apps,
            exclude = options.exclude,
            "options loaded"
        );

        let (options_tx, _) = watch::channel(options);
        Ok(Self {
            backend,
            options_tx,
        })
    }

    /// Immutable copy of the current options, for one operation.
    pub fn snapshot(&self) -> FuseOptions {
        self.options_tx.borrow().clone()
    }

    /// Persist `options` and replace the cached copy.
    ///
    /// The cache is only replaced once the backend accepted the write.
    /// A pattern that does not compile is logged but still saved.
    pub async fn save(&self, options: FuseOptions) -> Result<(), ConfigError> {
        if let Err(e) = validation::validate(&options) {
            warn!("saving options that will not apply cleanly: {e}");
        }

        self.backend.set(options.to_map()).await?;
        self.options_tx.send_replace(options);
        debug!("options cache replaced");
        Ok(())
    }
}

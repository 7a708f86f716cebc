//! Trigger dispatch: routes host triggers to the consolidation engine.

use tabfuse_common::actions::{Command, Trigger};
use tabfuse_common::notifications::Notification;
use tabfuse_common::TabFuseError;
use tabfuse_engine::{FuseError, FuseReport};

use super::core::TabFuseApp;

impl TabFuseApp {
    /// Handle a button click or keyboard command.
    ///
    /// Returns the report when a consolidation ran to completion. Failures
    /// are logged and turned into user notices, never propagated.
    pub async fn handle_trigger(&self, trigger: Trigger) -> Option<FuseReport> {
        tracing::debug!(?trigger, "trigger received");
        match trigger.command() {
            Command::FuseTabs => self.fuse_tabs().await,
        }
    }

    /// Handle a host command by its registered name. Names this extension
    /// did not register are ignored.
    pub async fn handle_host_command(&self, name: &str) -> Option<FuseReport> {
        match Command::from_name(name) {
            Some(command) => self.handle_trigger(Trigger::Command(command)).await,
            None => {
                tracing::warn!(command = name, "ignoring unknown command");
                None
            }
        }
    }

    async fn fuse_tabs(&self) -> Option<FuseReport> {
        let options = self.store.snapshot();
        match self.consolidator.fuse_tabs(&options).await {
            Ok(report) => {
                if !report.failed.is_empty() {
                    self.notify(Notification::warning(format!(
                        "{} tab(s) could not be moved",
                        report.failed.len()
                    )));
                }
                Some(report)
            }
            Err(FuseError::AlreadyRunning) => {
                tracing::debug!("trigger dropped while a consolidation is running");
                None
            }
            Err(FuseError::NoDestination) => {
                tracing::warn!("{}", FuseError::NoDestination);
                self.notify(Notification::warning(FuseError::NoDestination.to_string()));
                None
            }
            Err(e) => {
                self.report_failure(e.into());
                None
            }
        }
    }

    /// Log a failed consolidation and queue an error notice for the user.
    fn report_failure(&self, err: TabFuseError) {
        let message = match &err {
            TabFuseError::Config(e) => format!("configuration error: {e}"),
            other => format!("consolidation failed: {other}"),
        };
        tracing::error!("{message}");
        self.notify(Notification::error(message));
    }
}

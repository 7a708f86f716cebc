use std::path::PathBuf;

use crate::types::{TabId, WindowId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("settings backend error: {0}")]
    Backend(String),
}

/// A command or query rejected by the host window/tab service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("no such tab: {0}")]
    NoSuchTab(TabId),

    #[error("no such window: {0}")]
    NoSuchWindow(WindowId),

    #[error("host rejected request: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TabFuseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub mod actions;
pub mod errors;
pub mod notifications;
pub mod types;

pub use actions::{Command, Trigger};
pub use errors::{ConfigError, HostError, TabFuseError};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{Tab, TabId, Window, WindowId, WindowKind};

pub type Result<T> = std::result::Result<T, TabFuseError>;

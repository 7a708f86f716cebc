//! Tab consolidation engine.
//!
//! Moves every eligible tab from every eligible window into one
//! destination window, then puts focus back on the tab that was active
//! beforehand. All window/tab state lives in the host; this crate only
//! reads it through [`WindowService`] and sends commands back.

pub mod consolidate;
pub mod error;
pub mod host;
pub mod policy;

pub use consolidate::{Consolidator, FocusOutcome, FuseReport, MoveFailure};
pub use error::FuseError;
pub use host::{CommandInfo, ShellService, WindowService};
pub use host::simulated::{BrowserSnapshot, HostCall, SimulatedBrowser};
pub use policy::{window_is_movable, TabFilter};

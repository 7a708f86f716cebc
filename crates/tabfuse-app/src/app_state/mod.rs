//! Top-level extension state.
//!
//! Owns the options store, the consolidation engine and the host shell,
//! and routes triggers from the host to the engine.

mod core;
mod dispatch;
mod init;
mod options;
mod title;

#[cfg(test)]
mod tests;

pub use self::core::TabFuseApp;
pub use options::{OptionsPage, OptionsUpdate};
pub use title::button_title;

//! Eligibility rules: which windows give up their tabs, and which tabs move.
//!
//! Pure functions of the data and the options, with no host calls.

use fancy_regex::Regex;
use tabfuse_common::types::{Tab, Window, WindowKind};
use tabfuse_config::FuseOptions;

use tracing::warn;

use crate::error::FuseError;

/// Whether `window`'s tabs may be moved out of it.
///
/// Only panel, popup and app windows can be held back; normal windows and
/// categories the host invents later always take part.
pub fn window_is_movable(window: &Window, options: &FuseOptions) -> bool {
    match window.kind {
        WindowKind::Panel => options.include_panels,
        WindowKind::Popup => options.include_popups,
        WindowKind::App => options.include_apps,
        WindowKind::Normal | WindowKind::Unknown => true,
    }
}

/// Tab URL filter compiled once per consolidation.
///
/// Patterns use backtracking syntax, so lookaround and backreferences
/// written for the browser's own regex engine keep working.
#[derive(Debug, Clone)]
pub struct TabFilter {
    exclude: Option<Regex>,
}

impl TabFilter {
    /// Build the filter from the options.
    ///
    /// With `exclude` off, or an empty pattern, every tab passes.
    pub fn compile(options: &FuseOptions) -> Result<Self, FuseError> {
        if !options.exclusion_active() {
            return Ok(Self::allow_all());
        }
        let regex = Regex::new(&options.exclude_pattern).map_err(|source| {
            FuseError::InvalidExcludePattern {
                pattern: options.exclude_pattern.clone(),
                source,
            }
        })?;
        Ok(Self {
            exclude: Some(regex),
        })
    }

    pub fn allow_all() -> Self {
        Self { exclude: None }
    }

    /// Whether a tab showing `url` may move. Matches anywhere in the URL
    /// unless the pattern anchors itself.
    ///
    /// A match that aborts (backtrack limit) keeps the tab where it is.
    pub fn allows_url(&self, url: &str) -> bool {
        let Some(regex) = &self.exclude else {
            return true;
        };
        match regex.is_match(url) {
            Ok(matched) => !matched,
            Err(e) => {
                warn!(url, "exclude pattern could not be evaluated: {e}");
                false
            }
        }
    }

    pub fn allows(&self, tab: &Tab) -> bool {
        self.allows_url(&tab.url)
    }
}

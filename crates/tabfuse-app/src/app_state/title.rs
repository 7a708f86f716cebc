//! Toolbar button title: the command label plus its keyboard shortcut.

use tabfuse_common::Command;
use tabfuse_engine::CommandInfo;

use super::core::TabFuseApp;

// =============================================================================
// BUTTON TITLE
// =============================================================================

/// Title for the consolidate button.
///
/// Format: "Combine all tabs (Ctrl+Shift+U)", or
/// "Combine all tabs (no shortcut configured)" when the command has no
/// shortcut or the host does not list it.
pub fn button_title(commands: &[CommandInfo]) -> String {
    let command = Command::FuseTabs;
    let shortcut = commands
        .iter()
        .find(|c| c.name == command.name())
        .map(|c| c.shortcut.as_str())
        .unwrap_or_default();

    if shortcut.is_empty() {
        format!("{} (no shortcut configured)", command.label())
    } else {
        format!("{} ({shortcut})", command.label())
    }
}

impl TabFuseApp {
    /// Recompute the button title from the host's command registry and
    /// push it to the host. Returns the title that was set.
    pub async fn refresh_button_title(&self) -> String {
        let commands = match self.shell.commands().await {
            Ok(commands) => commands,
            Err(e) => {
                tracing::warn!("could not read command registry: {e}");
                Vec::new()
            }
        };

        let title = button_title(&commands);
        if let Err(e) = self.shell.set_button_title(&title).await {
            tracing::warn!("could not set button title: {e}");
        }
        title
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, shortcut: &str) -> CommandInfo {
        CommandInfo {
            name: name.into(),
            shortcut: shortcut.into(),
        }
    }

    #[test]
    fn title_includes_shortcut() {
        let commands = vec![info("_execute_action", ""), info("fuseTabs", "Ctrl+Shift+U")];
        assert_eq!(button_title(&commands), "Combine all tabs (Ctrl+Shift+U)");
    }

    #[test]
    fn empty_shortcut_is_reported() {
        let commands = vec![info("fuseTabs", "")];
        assert_eq!(
            button_title(&commands),
            "Combine all tabs (no shortcut configured)"
        );
    }

    #[test]
    fn unregistered_command_is_reported() {
        assert_eq!(
            button_title(&[]),
            "Combine all tabs (no shortcut configured)"
        );
    }
}

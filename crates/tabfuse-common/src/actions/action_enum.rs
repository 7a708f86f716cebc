use serde::{Deserialize, Serialize};

/// Every named command the extension registers with the host.
///
/// Keyboard shortcuts arrive as host command-name strings and are resolved
/// to a `Command` once, at the boundary; the app dispatcher matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    #[serde(rename = "fuseTabs")]
    FuseTabs,
}

/// Something the user did that should run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A registered keyboard shortcut fired.
    Command(Command),
    /// The toolbar button was clicked.
    ButtonClicked,
}

impl Trigger {
    pub fn command(self) -> Command {
        match self {
            Trigger::Command(command) => command,
            Trigger::ButtonClicked => Command::FuseTabs,
        }
    }
}

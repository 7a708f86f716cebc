use super::Command;

impl Command {
    /// All registered commands.
    pub const ALL: &'static [Command] = &[Command::FuseTabs];

    /// Name the host uses for this command in its command registry.
    pub fn name(self) -> &'static str {
        match self {
            Command::FuseTabs => "fuseTabs",
        }
    }

    /// Human-readable label, used for the toolbar button title.
    pub fn label(self) -> &'static str {
        match self {
            Command::FuseTabs => "Combine all tabs",
        }
    }

    /// Resolve a host command name.
    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.iter().copied().find(|c| c.name() == name)
    }
}

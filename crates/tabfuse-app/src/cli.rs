use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// TabFuse: combine the tabs of every browser window into one.
#[derive(Parser, Debug)]
#[command(name = "tabfuse", version, about)]
pub struct Args {
    /// Options file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Consolidate the windows of a browser snapshot.
    Fuse {
        /// JSON snapshot of the browser's windows and tabs.
        #[arg(long)]
        snapshot: PathBuf,

        /// Write the resulting browser state back to the snapshot file.
        #[arg(long)]
        write: bool,

        /// Dispatch this host command name instead of a button click.
        #[arg(long)]
        command: Option<String>,
    },

    /// Print the toolbar button title for a browser snapshot.
    Title {
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Show or edit the consolidation options.
    Options {
        #[command(subcommand)]
        command: OptionsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum OptionsCommand {
    Show,
    Set(SetArgs),
    /// Restore every option to its default.
    Reset,
}

#[derive(clap::Args, Debug, Default)]
pub struct SetArgs {
    #[arg(long)]
    pub include_panels: Option<bool>,
    #[arg(long)]
    pub include_popups: Option<bool>,
    #[arg(long)]
    pub include_apps: Option<bool>,
    #[arg(long)]
    pub exclude: Option<bool>,
    #[arg(long)]
    pub exclude_pattern: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fuse_with_snapshot() {
        let args = Args::try_parse_from(["tabfuse", "fuse", "--snapshot", "state.json"]).unwrap();
        match args.command {
            CliCommand::Fuse {
                snapshot,
                write,
                command,
            } => {
                assert_eq!(snapshot, PathBuf::from("state.json"));
                assert!(!write);
                assert!(command.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_options_set_flags() {
        let args = Args::try_parse_from([
            "tabfuse",
            "options",
            "set",
            "--include-popups",
            "true",
            "--exclude-pattern",
            "^chrome://",
        ])
        .unwrap();
        let CliCommand::Options {
            command: OptionsCommand::Set(set),
        } = args.command
        else {
            panic!("expected options set");
        };
        assert_eq!(set.include_popups, Some(true));
        assert_eq!(set.exclude_pattern.as_deref(), Some("^chrome://"));
        assert_eq!(set.include_panels, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["tabfuse", "options", "show", "--json", "--config", "o.toml"])
                .unwrap();
        assert!(args.json);
        assert_eq!(args.config, Some(PathBuf::from("o.toml")));
    }

    #[test]
    fn fuse_requires_snapshot() {
        assert!(Args::try_parse_from(["tabfuse", "fuse"]).is_err());
    }
}

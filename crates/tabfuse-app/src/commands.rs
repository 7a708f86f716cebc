//! Command-line handlers. Each one returns the text to print on stdout.

use std::path::Path;
use std::sync::Arc;

use tabfuse_common::actions::Trigger;
use tabfuse_common::{Result, TabFuseError};
use tabfuse_config::{FuseOptions, SettingsBackend, TomlFileBackend};
use tabfuse_engine::{BrowserSnapshot, FuseReport, SimulatedBrowser};

use crate::app_state::{button_title, OptionsPage, OptionsUpdate, TabFuseApp};
use crate::cli::{Args, CliCommand, OptionsCommand, SetArgs};

pub async fn run(args: &Args) -> Result<String> {
    match &args.command {
        CliCommand::Fuse {
            snapshot,
            write,
            command,
        } => {
            let backend = settings_backend(args)?;
            fuse(backend, snapshot, *write, command.as_deref(), args.json).await
        }
        CliCommand::Title { snapshot } => title(snapshot),
        CliCommand::Options { command } => {
            let backend = settings_backend(args)?;
            options(backend, command, args.json).await
        }
    }
}

fn settings_backend(args: &Args) -> Result<Arc<dyn SettingsBackend>> {
    let backend = match &args.config {
        Some(path) => {
            tracing::info!("Using options file override: {}", path.display());
            TomlFileBackend::new(path)
        }
        None => TomlFileBackend::at_default_path()?,
    };
    Ok(Arc::new(backend))
}

fn read_snapshot(path: &Path) -> Result<BrowserSnapshot> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| {
        TabFuseError::Other(format!("invalid snapshot {}: {e}", path.display()))
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| TabFuseError::Other(e.to_string()))
}

// =============================================================================
// FUSE
// =============================================================================

async fn fuse(
    backend: Arc<dyn SettingsBackend>,
    snapshot_path: &Path,
    write: bool,
    command: Option<&str>,
    json: bool,
) -> Result<String> {
    let browser = Arc::new(SimulatedBrowser::new(read_snapshot(snapshot_path)?));
    let app = TabFuseApp::start(backend, browser.clone(), browser.clone()).await?;

    let report = match command {
        Some(name) => app.handle_host_command(name).await,
        None => app.handle_trigger(Trigger::ButtonClicked).await,
    };

    for notice in app.take_notifications() {
        eprintln!("{}", notice.message);
    }

    if write {
        std::fs::write(snapshot_path, to_json(&browser.snapshot())?)?;
        tracing::info!("Snapshot written to {}", snapshot_path.display());
    }

    render_report(report.as_ref(), json)
}

fn render_report(report: Option<&FuseReport>, json: bool) -> Result<String> {
    match (report, json) {
        (Some(report), true) => to_json(report),
        (Some(report), false) => Ok(report.summary()),
        (None, true) => Ok("null".into()),
        (None, false) => Ok("nothing consolidated".into()),
    }
}

// =============================================================================
// TITLE
// =============================================================================

fn title(snapshot_path: &Path) -> Result<String> {
    let snapshot = read_snapshot(snapshot_path)?;
    Ok(button_title(&snapshot.commands))
}

// =============================================================================
// OPTIONS
// =============================================================================

async fn options(
    backend: Arc<dyn SettingsBackend>,
    command: &OptionsCommand,
    json: bool,
) -> Result<String> {
    let page = OptionsPage::open(backend).await?;
    let options = match command {
        OptionsCommand::Show => page.current(),
        OptionsCommand::Set(set) => {
            let update = to_update(set);
            if update.is_empty() {
                tracing::warn!("no option given, nothing saved");
                page.current()
            } else {
                page.save(&update).await?
            }
        }
        OptionsCommand::Reset => page.reset().await?,
    };

    for status in page.status() {
        eprintln!("{status}");
    }
    render_options(&options, json)
}

fn to_update(set: &SetArgs) -> OptionsUpdate {
    OptionsUpdate {
        include_panels: set.include_panels,
        include_popups: set.include_popups,
        include_apps: set.include_apps,
        exclude: set.exclude,
        exclude_pattern: set.exclude_pattern.clone(),
    }
}

fn render_options(options: &FuseOptions, json: bool) -> Result<String> {
    if json {
        return Ok(tabfuse_config::options_to_json(options));
    }
    Ok(format!(
        "includePanels = {}\nincludePopups = {}\nincludeApps = {}\nexclude = {}\nexcludePattern = {:?}",
        options.include_panels,
        options.include_popups,
        options.include_apps,
        options.exclude,
        options.exclude_pattern,
    ))
}

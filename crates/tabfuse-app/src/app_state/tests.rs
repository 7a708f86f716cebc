//! App-level tests: startup order, dispatch and the options page.

use std::sync::Arc;

use serde_json::json;
use tabfuse_common::actions::{Command, Trigger};
use tabfuse_common::notifications::NotificationLevel;
use tabfuse_common::types::{Tab, TabId, Window, WindowId, WindowKind};
use tabfuse_config::{MemoryBackend, SettingsMap};
use tabfuse_engine::{BrowserSnapshot, CommandInfo, HostCall, SimulatedBrowser};

use super::*;

fn tab(id: i64, window: i64, url: &str, active: bool) -> Tab {
    Tab {
        id: TabId(id),
        window_id: WindowId(window),
        url: url.into(),
        active,
    }
}

fn two_windows(shortcut: &str) -> Arc<SimulatedBrowser> {
    Arc::new(SimulatedBrowser::new(BrowserSnapshot {
        windows: vec![
            Window {
                id: WindowId(1),
                kind: WindowKind::Normal,
                focused: true,
                tabs: vec![tab(10, 1, "https://a.example", true)],
            },
            Window {
                id: WindowId(2),
                kind: WindowKind::Normal,
                focused: false,
                tabs: vec![
                    tab(20, 2, "chrome://settings", true),
                    tab(21, 2, "https://b.example", false),
                ],
            },
        ],
        last_focused: Some(WindowId(1)),
        commands: vec![CommandInfo {
            name: "fuseTabs".into(),
            shortcut: shortcut.into(),
        }],
        button_title: None,
    }))
}

fn values(pairs: &[(&str, serde_json::Value)]) -> SettingsMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

async fn start(backend: MemoryBackend, browser: &Arc<SimulatedBrowser>) -> TabFuseApp {
    TabFuseApp::start(Arc::new(backend), browser.clone(), browser.clone())
        .await
        .unwrap()
}

fn tab_ids(browser: &SimulatedBrowser, window: i64) -> Vec<TabId> {
    browser
        .window(WindowId(window))
        .map(|w| w.tabs.iter().map(|t| t.id).collect())
        .unwrap_or_default()
}

// =============================================================================
// STARTUP
// =============================================================================

#[tokio::test]
async fn start_sets_button_title() {
    let browser = two_windows("Ctrl+Shift+U");
    let _app = start(MemoryBackend::new(), &browser).await;

    assert_eq!(
        browser.button_title().as_deref(),
        Some("Combine all tabs (Ctrl+Shift+U)")
    );
    assert_eq!(
        browser.calls(),
        vec![HostCall::SetButtonTitle {
            title: "Combine all tabs (Ctrl+Shift+U)".into()
        }]
    );
}

#[tokio::test]
async fn start_without_shortcut() {
    let browser = two_windows("");
    let _app = start(MemoryBackend::new(), &browser).await;
    assert_eq!(
        browser.button_title().as_deref(),
        Some("Combine all tabs (no shortcut configured)")
    );
}

#[tokio::test]
async fn start_loads_stored_options() {
    let backend = MemoryBackend::with_values(values(&[("includePopups", json!(true))]));
    let browser = two_windows("");
    let app = start(backend, &browser).await;

    let options = app.options();
    assert!(options.include_popups);
    assert!(options.include_apps);
    assert!(!options.include_panels);
}

#[tokio::test]
async fn start_fails_on_malformed_stored_value() {
    let backend = MemoryBackend::with_values(values(&[("includeApps", json!("nope"))]));
    let browser = two_windows("");
    let result = TabFuseApp::start(Arc::new(backend), browser.clone(), browser.clone()).await;
    assert!(result.is_err());
    assert!(browser.calls().is_empty());
}

// =============================================================================
// DISPATCH
// =============================================================================

#[tokio::test]
async fn button_click_consolidates() {
    let browser = two_windows("");
    let app = start(MemoryBackend::new(), &browser).await;

    let report = app.handle_trigger(Trigger::ButtonClicked).await.unwrap();
    assert_eq!(report.destination, WindowId(1));
    assert_eq!(report.moved, vec![TabId(20), TabId(21)]);
    assert_eq!(tab_ids(&browser, 1), vec![TabId(10), TabId(20), TabId(21)]);
    assert!(browser.window(WindowId(2)).is_none());
}

#[tokio::test]
async fn keyboard_command_by_name() {
    let browser = two_windows("");
    let app = start(MemoryBackend::new(), &browser).await;

    let report = app.handle_host_command("fuseTabs").await;
    assert!(report.is_some());
    assert_eq!(tab_ids(&browser, 1).len(), 3);
}

#[tokio::test]
async fn unknown_command_is_ignored() {
    let browser = two_windows("");
    let app = start(MemoryBackend::new(), &browser).await;

    assert!(app.handle_host_command("closeEverything").await.is_none());
    assert_eq!(browser.move_count(), 0);
}

#[tokio::test]
async fn command_and_button_share_one_path() {
    let a = two_windows("");
    let b = two_windows("");
    let app_a = start(MemoryBackend::new(), &a).await;
    let app_b = start(MemoryBackend::new(), &b).await;

    let by_button = app_a.handle_trigger(Trigger::ButtonClicked).await;
    let by_command = app_b
        .handle_trigger(Trigger::Command(Command::FuseTabs))
        .await;
    assert_eq!(by_button, by_command);
}

#[tokio::test]
async fn no_destination_becomes_warning() {
    let browser = Arc::new(SimulatedBrowser::new(BrowserSnapshot {
        windows: vec![Window {
            id: WindowId(5),
            kind: WindowKind::Popup,
            focused: true,
            tabs: vec![tab(50, 5, "https://p.example", true)],
        }],
        ..Default::default()
    }));
    let app = start(MemoryBackend::new(), &browser).await;

    assert!(app.handle_trigger(Trigger::ButtonClicked).await.is_none());
    assert_eq!(browser.move_count(), 0);

    let notices = app.take_notifications();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NotificationLevel::Warning);
}

#[tokio::test]
async fn invalid_pattern_is_configuration_error() {
    let backend = MemoryBackend::with_values(values(&[
        ("exclude", json!(true)),
        ("excludePattern", json!("(unclosed")),
    ]));
    let browser = two_windows("");
    let app = start(backend, &browser).await;

    assert!(app.handle_trigger(Trigger::ButtonClicked).await.is_none());
    assert_eq!(browser.move_count(), 0);

    let notices = app.take_notifications();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NotificationLevel::Error);
    assert!(notices[0].message.starts_with("configuration error"));
    assert!(app.take_notifications().is_empty());
}

// =============================================================================
// OPTIONS PAGE
// =============================================================================

#[tokio::test]
async fn saved_options_apply_to_next_consolidation() {
    let browser = two_windows("");
    let app = start(MemoryBackend::new(), &browser).await;
    let page = app.options_page();

    page.save(&OptionsUpdate {
        exclude: Some(true),
        exclude_pattern: Some("^chrome://".into()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(page.status(), vec!["saved!".to_string()]);

    let report = app.handle_trigger(Trigger::ButtonClicked).await.unwrap();
    assert_eq!(report.moved, vec![TabId(21)]);
    assert_eq!(report.excluded, vec![TabId(20)]);
    assert_eq!(tab_ids(&browser, 2), vec![TabId(20)]);
}

#[tokio::test]
async fn save_writes_every_key_to_backend() {
    let backend = Arc::new(MemoryBackend::new());
    let page = OptionsPage::open(backend.clone()).await.unwrap();

    let saved = page
        .save(&OptionsUpdate {
            include_panels: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(saved.include_panels);

    let stored = backend.stored();
    assert_eq!(stored.get("includePanels"), Some(&json!(true)));
    assert_eq!(stored.get("includeApps"), Some(&json!(true)));
    assert_eq!(stored.get("excludePattern"), Some(&json!("")));
}

#[tokio::test]
async fn reopened_page_shows_saved_values() {
    let backend = Arc::new(MemoryBackend::new());
    let page = OptionsPage::open(backend.clone()).await.unwrap();
    page.save(&OptionsUpdate {
        include_apps: Some(false),
        ..Default::default()
    })
    .await
    .unwrap();

    let reopened = OptionsPage::open(backend).await.unwrap();
    assert!(!reopened.current().include_apps);
}

#[tokio::test]
async fn malformed_pattern_is_still_saved() {
    let backend = Arc::new(MemoryBackend::new());
    let page = OptionsPage::open(backend.clone()).await.unwrap();
    page.save(&OptionsUpdate {
        exclude: Some(true),
        exclude_pattern: Some("[".into()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(backend.stored().get("excludePattern"), Some(&json!("[")));
}

#[tokio::test]
async fn reset_restores_defaults() {
    let backend = Arc::new(MemoryBackend::with_values(values(&[
        ("includePanels", json!(true)),
        ("includeApps", json!(false)),
    ])));
    let page = OptionsPage::open(backend.clone()).await.unwrap();
    assert!(page.current().include_panels);

    let options = page.reset().await.unwrap();
    assert_eq!(options, tabfuse_config::FuseOptions::default());
    assert_eq!(backend.stored().get("includeApps"), Some(&json!(true)));
}

#[test]
fn update_applies_only_given_fields() {
    let update = OptionsUpdate {
        include_popups: Some(true),
        ..Default::default()
    };
    assert!(!update.is_empty());
    let options = update.apply(tabfuse_config::FuseOptions::default());
    assert!(options.include_popups);
    assert!(options.include_apps);
    assert!(OptionsUpdate::default().is_empty());
}

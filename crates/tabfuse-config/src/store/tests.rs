//! Tests for the config store.

use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::backend::{MemoryBackend, SettingsMap, TomlFileBackend};
use crate::schema::FuseOptions;

#[tokio::test]
async fn load_from_empty_backend_uses_defaults() {
    let store = ConfigStore::load(Arc::new(MemoryBackend::new()))
        .await
        .unwrap();
    assert_eq!(store.snapshot(), FuseOptions::default());
}

#[tokio::test]
async fn load_merges_stored_values() {
    let mut stored = SettingsMap::new();
    stored.insert("includePanels".into(), json!(true));
    stored.insert("excludePattern".into(), json!("^chrome://"));
    let store = ConfigStore::load(Arc::new(MemoryBackend::with_values(stored)))
        .await
        .unwrap();

    let options = store.snapshot();
    assert!(options.include_panels);
    assert_eq!(options.exclude_pattern, "^chrome://");
    assert!(options.include_apps);
}

#[tokio::test]
async fn load_rejects_mistyped_values() {
    let mut stored = SettingsMap::new();
    stored.insert("includeApps".into(), json!("sometimes"));
    let result = ConfigStore::load(Arc::new(MemoryBackend::with_values(stored))).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn save_replaces_snapshot_and_persists() {
    let backend = Arc::new(MemoryBackend::new());
    let store = ConfigStore::load(backend.clone()).await.unwrap();
    let before = store.snapshot();

    let updated = FuseOptions {
        include_popups: true,
        exclude: true,
        exclude_pattern: "^about:".into(),
        ..Default::default()
    };
    store.save(updated.clone()).await.unwrap();

    assert_eq!(store.snapshot(), updated);
    // Snapshots taken earlier are unaffected.
    assert_eq!(before, FuseOptions::default());
    assert_eq!(backend.stored()["excludePattern"], json!("^about:"));
}

#[tokio::test]
async fn save_accepts_malformed_pattern() {
    let store = ConfigStore::load(Arc::new(MemoryBackend::new()))
        .await
        .unwrap();
    let updated = FuseOptions {
        exclude: true,
        exclude_pattern: "(".into(),
        ..Default::default()
    };
    store.save(updated.clone()).await.unwrap();
    assert_eq!(store.snapshot().exclude_pattern, "(");
}

#[tokio::test]
async fn reload_from_file_sees_saved_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.toml");

    let store = ConfigStore::load(Arc::new(TomlFileBackend::new(&path)))
        .await
        .unwrap();
    store
        .save(FuseOptions {
            include_apps: false,
            ..Default::default()
        })
        .await
        .unwrap();

    let reloaded = ConfigStore::load(Arc::new(TomlFileBackend::new(&path)))
        .await
        .unwrap();
    assert!(!reloaded.snapshot().include_apps);
}

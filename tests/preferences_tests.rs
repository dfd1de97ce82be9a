//! Integration tests for theme persistence
//!
//! Uses the file store in a temporary directory so values outlive the
//! store instance that wrote them.

use std::sync::Arc;
use weekly_menu::preferences::{PreferenceStore, THEME_KEY};
use weekly_menu::storage::{FileStore, KeyValueStore, MemoryStore};
use weekly_menu::types::ThemeMode;

fn file_preferences(dir: &std::path::Path) -> PreferenceStore {
    PreferenceStore::new(Arc::new(FileStore::new(dir)))
}

#[tokio::test]
async fn test_first_run_is_light() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let prefs = file_preferences(dir.path());

    assert_eq!(prefs.try_load_theme().await.unwrap(), None);
    assert_eq!(prefs.load_theme().await, ThemeMode::Light);
}

#[tokio::test]
async fn test_dark_survives_restart() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    file_preferences(dir.path())
        .save_theme(ThemeMode::Dark)
        .await
        .expect("Failed to save");

    // A fresh store over the same directory stands in for a new process.
    let reopened = file_preferences(dir.path());
    assert_eq!(reopened.load_theme().await, ThemeMode::Dark);
}

#[tokio::test]
async fn test_toggle_back_to_light() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let prefs = file_preferences(dir.path());

    prefs.save_theme(ThemeMode::Dark).await.unwrap();
    prefs.save_theme(ThemeMode::Dark.toggled()).await.unwrap();
    assert_eq!(prefs.load_theme().await, ThemeMode::Light);
}

#[tokio::test]
async fn test_stored_strings() {
    let store = Arc::new(MemoryStore::new());
    let prefs = PreferenceStore::new(store.clone());

    prefs.save_theme(ThemeMode::Dark).await.unwrap();
    assert_eq!(store.get(THEME_KEY).await.unwrap().as_deref(), Some("dark"));

    prefs.save_theme(ThemeMode::Light).await.unwrap();
    assert_eq!(store.get(THEME_KEY).await.unwrap().as_deref(), Some("light"));
}

#[tokio::test]
async fn test_unreadable_value_falls_back_to_light() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    // A directory where the value file should be makes the read fail.
    std::fs::create_dir_all(dir.path().join("theme.pref")).unwrap();

    let prefs = file_preferences(dir.path());
    assert!(prefs.try_load_theme().await.is_err());
    assert_eq!(prefs.load_theme().await, ThemeMode::Light);
}

#[tokio::test]
async fn test_write_failure_surfaces_to_caller() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    // The store directory is a regular file, so it cannot be created.
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, "not a directory").unwrap();

    let prefs = file_preferences(&blocked);
    assert!(prefs.save_theme(ThemeMode::Dark).await.is_err());
}

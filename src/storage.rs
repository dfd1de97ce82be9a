//! Device local key-value storage.
//!
//! This module provides:
//! - the [`KeyValueStore`] trait used by the preference layer
//! - a file backed store for native platforms
//! - a `localStorage` backed store for the browser
//! - an in-memory store for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "weekly-menu";
const MAX_KEY_LEN: usize = 64;
const LOCAL_STORAGE_PREFIX: &str = "weekly_menu_";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage is unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Asynchronous string keyed storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key`.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// The store used by the app: files on native platforms, `localStorage` on WASM.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store(dir: Option<PathBuf>) -> Arc<dyn KeyValueStore> {
    let store = FileStore::new(dir.unwrap_or_else(FileStore::default_dir));
    tracing::debug!(dir = %store.dir().display(), "using file preference store");
    Arc::new(store)
}

#[cfg(target_arch = "wasm32")]
pub fn default_store(_dir: Option<std::path::PathBuf>) -> Arc<dyn KeyValueStore> {
    Arc::new(LocalStorageStore)
}

/// Sanitize storage key for filesystem use
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_KEY_LEN)
        .collect()
}

// ============================================
// File Backend (native platforms)
// ============================================

/// Stores each key in its own file under a directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform local-data directory, or `cache/preferences` when there is none.
    pub fn default_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            return data_dir.join(APP_DIR_NAME).join("preferences");
        }

        PathBuf::from("cache").join("preferences")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.pref", sanitize_key(key)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn io_error(key: &str) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        key: key.to_string(),
        source,
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(key)(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(io_error(key))?;
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(io_error(key))
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(key)(err)),
        }
    }
}

// ============================================
// Browser Backend (WASM)
// ============================================

/// Namespaced `localStorage` key, so entries don't collide with other apps on the origin.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn local_storage_key(key: &str) -> String {
    format!("{}{}", LOCAL_STORAGE_PREFIX, sanitize_key(key))
}

/// Browser `localStorage`. Values survive page reloads.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no browser window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait]
impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(&local_storage_key(key))
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(&local_storage_key(key), value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        Self::storage()?
            .remove_item(&local_storage_key(key))
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

// ============================================
// Memory Backend
// ============================================

/// Process local storage. Values are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(entries.get(&sanitize_key(key)).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.insert(sanitize_key(key), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.remove(&sanitize_key(key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("theme"), "theme");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key(&"k".repeat(100)).len(), MAX_KEY_LEN);
    }

    #[test]
    fn test_local_storage_key_is_namespaced() {
        assert_eq!(local_storage_key("theme"), "weekly_menu_theme");
        assert_eq!(local_storage_key("user:theme"), "weekly_menu_user_theme");
    }

    #[tokio::test]
    async fn test_default_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        default_store(Some(dir.path().to_path_buf()))
            .set("theme", "dark")
            .await
            .unwrap();

        let reopened = default_store(Some(dir.path().to_path_buf()));
        assert_eq!(reopened.get("theme").await.unwrap(), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").await.unwrap(), None);

        store.set("theme", "dark").await.unwrap();
        assert_eq!(store.get("theme").await.unwrap(), Some("dark".to_string()));

        store.remove("theme").await.unwrap();
        assert_eq!(store.get("theme").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert_eq!(store.get("theme").await.unwrap(), None);
        store.remove("theme").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("theme", "light").await.unwrap();
        store.set("theme", "dark").await.unwrap();
        assert_eq!(store.get("theme").await.unwrap(), Some("dark".to_string()));
        assert!(dir.path().join("theme.pref").exists());
    }
}

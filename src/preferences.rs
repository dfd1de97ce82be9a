//! Persisted theme preference.

use crate::storage::{KeyValueStore, StorageResult};
use crate::types::ThemeMode;
use std::sync::Arc;

pub const THEME_KEY: &str = "theme";

/// Reads and writes user preferences through a [`KeyValueStore`].
///
/// Cheap to clone; clones share the underlying store.
#[derive(Clone)]
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}

impl PartialEq for PreferenceStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored theme, or `None` if nothing was ever saved.
    pub async fn try_load_theme(&self) -> StorageResult<Option<ThemeMode>> {
        let raw = self.store.get(THEME_KEY).await?;
        Ok(raw.as_deref().map(ThemeMode::from_stored))
    }

    /// The stored theme, falling back to light when absent or unreadable.
    pub async fn load_theme(&self) -> ThemeMode {
        match self.try_load_theme().await {
            Ok(Some(mode)) => mode,
            Ok(None) => {
                tracing::debug!("no saved theme, using default");
                ThemeMode::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read saved theme, using default");
                ThemeMode::default()
            }
        }
    }

    pub async fn save_theme(&self, mode: ThemeMode) -> StorageResult<()> {
        self.store.set(THEME_KEY, mode.as_stored()).await?;
        tracing::debug!(theme = mode.as_stored(), "saved theme");
        Ok(())
    }
}

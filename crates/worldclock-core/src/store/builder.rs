//! Builder for creating and configuring WatchListStore instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use super::{notify::LogNotifier, Notifier, WatchListStore};
use crate::{
    error::Result,
    storage::{KeyValueStore, SqliteStorage},
};

/// Storage key the watch list is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "cities";

/// Builder for creating and configuring WatchListStore instances.
pub struct WatchListStoreBuilder {
    database_path: Option<PathBuf>,
    storage: Option<Arc<dyn KeyValueStore>>,
    storage_key: String,
    notifier: Option<Arc<dyn Notifier>>,
}

impl WatchListStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            storage: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notifier: None,
        }
    }

    /// Sets a custom SQLite database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/worldclock/worldclock.db`. Ignored when a storage
    /// backend is supplied with [`Self::with_storage`].
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given storage backend instead of SQLite.
    pub fn with_storage<S: KeyValueStore + 'static>(self, storage: S) -> Self {
        self.with_shared_storage(Arc::new(storage))
    }

    /// Uses a storage backend that the caller keeps a handle to.
    pub fn with_shared_storage(mut self, storage: Arc<dyn KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Overrides the key the snapshot is stored under.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the sink for user-facing notices. Defaults to [`LogNotifier`].
    pub fn with_notifier<N: Notifier + 'static>(mut self, notifier: N) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    /// Builds a store in the `Hydrating` state.
    ///
    /// Mutations issued before [`WatchListStore::hydrate`] completes are
    /// queued. Spawns the snapshot writer, so this must run inside a tokio
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::XdgDirectory`, `ClockError::FileSystem` or
    /// `ClockError::Database` if the default SQLite storage cannot be opened.
    pub async fn build(self) -> Result<WatchListStore> {
        let storage = match self.storage {
            Some(storage) => storage,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => SqliteStorage::default_path()?,
                };
                Arc::new(SqliteStorage::open(db_path).await?)
            }
        };
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(LogNotifier));

        Ok(WatchListStore::new(storage, self.storage_key, notifier))
    }

    /// Builds the store and hydrates it from storage.
    pub async fn open(self) -> Result<WatchListStore> {
        let mut store = self.build().await?;
        store.hydrate().await;
        Ok(store)
    }
}

impl Default for WatchListStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use worldclock_core::{WatchListStore, WatchListStoreBuilder};

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    (temp_dir, db_path)
}

/// Helper function to open a hydrated store backed by the given database
#[allow(dead_code)]
pub async fn open_store(db_path: &Path) -> WatchListStore {
    WatchListStoreBuilder::new()
        .with_database_path(Some(db_path))
        .open()
        .await
        .expect("Failed to open store")
}

//! SQLite storage backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};
use tokio::task;

use super::KeyValueStore;
use crate::error::{ClockError, DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Database connection wrapper for the key-value table.
struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a connection and makes sure the schema exists.
    fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }

    fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write value")?;
        Ok(())
    }
}

/// Key-value storage in a SQLite database file.
///
/// A fresh connection is opened for every call on the blocking thread pool,
/// so the handle itself is cheap to share.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: PathBuf,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::FileSystem` if the parent directory cannot be
    /// created, and `ClockError::Database` if schema initialization fails.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ClockError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ClockError>(())
        })
        .await
        .map_err(ClockError::join)??;

        Ok(Self { db_path })
    }

    /// Opens the database at the default location.
    pub async fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?).await
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/worldclock/worldclock.db`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("worldclock")
            .place_data_file("worldclock.db")
            .map_err(|e| ClockError::XdgDirectory(e.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl KeyValueStore for SqliteStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_value(&key)
        })
        .await
        .map_err(ClockError::join)?
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let key = key.to_string();
        let value = value.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.set_value(&key, &value)
        })
        .await
        .map_err(ClockError::join)?
    }
}

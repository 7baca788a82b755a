//! Durable key-value storage used to persist the watch list.
//!
//! The store only needs two primitives, `get` and `set`, addressed by string
//! key. Backends:
//!
//! - [`SqliteStorage`]: a single-table SQLite database, the default for the
//!   CLI. Blocking SQLite calls run on tokio's blocking pool.
//! - [`MemoryStorage`]: a process-local map, useful for tests and for
//!   embedding the store without touching disk.

use async_trait::async_trait;

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Asynchronous string key-value storage.
///
/// Implementations must be shareable across tasks: the watch-list store hands
/// the backend to a background writer task.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

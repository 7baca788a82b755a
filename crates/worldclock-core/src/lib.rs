//! Core library for the world clock application.
//!
//! This crate owns everything below the user interface: the built-in city
//! catalog, the time formatter, key-value storage backends, and the
//! [`WatchListStore`] that holds the cities a user follows.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐ intents ┌────────────────┐ snapshots ┌──────────────┐
//! │ Presentation │────────▶│ WatchListStore │──────────▶│ KeyValueStore│
//! │   (CLI)      │◀────────│                │  (FIFO)   │ (SQLite/mem) │
//! └──────────────┘ outcomes└────────────────┘           └──────────────┘
//!        │                        │ watch channel
//!        │ every second           ▼
//!        └──────────────▶ clock::clock_rows
//! ```
//!
//! Mutations return typed outcomes ([`AddOutcome`], [`RemoveOutcome`],
//! [`ReorderOutcome`]); the presentation layer decides how to show them.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::Timestamp;
//! use worldclock_core::{
//!     clock::clock_rows, display::ClockBoard, storage::MemoryStorage, Catalog,
//!     WatchListStoreBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::builtin();
//! let mut store = WatchListStoreBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .open()
//!     .await?;
//!
//! for entry in catalog.search("o") {
//!     store.add(entry.into());
//! }
//!
//! let board = ClockBoard(clock_rows(&store.list(), Timestamp::now()));
//! println!("{board}");
//! store.flush().await;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod clock;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use catalog::Catalog;
pub use clock::{clock_rows, format_in_zone, CityTime};
pub use display::{ClockBoard, SearchHit, SearchResults, ZonedTime};
pub use error::{ClockError, Result};
pub use models::{
    AddOutcome, CatalogEntry, City, Notice, NoticeEvent, NoticeKind, Outcome, RemoveOutcome,
    ReorderOutcome,
};
pub use storage::{KeyValueStore, MemoryStorage, SqliteStorage};
pub use store::{Lifecycle, LogNotifier, Notifier, WatchListStore, WatchListStoreBuilder};

//! The watch list: the cities a user has chosen to follow.
//!
//! [`WatchListStore`] is the single source of truth for the watch list. It
//! guarantees that no two entries share an ID, persists every successful
//! mutation, and publishes the new list to subscribers.
//!
//! # Lifecycle
//!
//! ```text
//! ┌─────────────┐  hydrate()  ┌─────────────┐
//! │  Hydrating  │────────────▶│    Ready    │
//! │ (queue ops) │             │ (write-thru)│
//! └─────────────┘             └─────────────┘
//! ```
//!
//! While hydrating, mutations are queued and report `Queued`. Hydration loads
//! the persisted snapshot (falling back to an empty list on any failure),
//! switches to `Ready`, then replays the queue against the loaded list. No
//! snapshot is written before that point, so an early mutation can never
//! overwrite cities that were saved by a previous session.
//!
//! # Persistence
//!
//! Each successful mutation submits the full snapshot to a background writer
//! that performs one storage write at a time in submission order. Mutations
//! return without waiting for the write; failures are logged and the
//! in-memory list stays authoritative. Call [`WatchListStore::flush`] before
//! exiting a short-lived process.
//!
//! # Examples
//!
//! ```rust
//! use worldclock_core::{storage::MemoryStorage, AddOutcome, City, WatchListStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = WatchListStoreBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .open()
//!     .await?;
//!
//! let seoul = City::new("1", "Seoul", "Asia/Seoul");
//! assert!(matches!(store.add(seoul.clone()), AddOutcome::Added(_)));
//! assert!(matches!(store.add(seoul), AddOutcome::AlreadyPresent(_)));
//! assert_eq!(store.list().len(), 1);
//!
//! store.flush().await;
//! # Ok(())
//! # }
//! ```

use std::{collections::VecDeque, sync::Arc};

use tokio::sync::watch;

pub mod builder;
pub mod notify;
pub mod snapshot;
mod writer;


pub use builder::{WatchListStoreBuilder, DEFAULT_STORAGE_KEY};
pub use notify::{LogNotifier, Notifier};

use crate::{
    models::{AddOutcome, City, Notice, Outcome, RemoveOutcome, ReorderOutcome},
    storage::KeyValueStore,
};
use writer::SnapshotWriter;

/// Lifecycle state of a [`WatchListStore`]. It never returns to `Hydrating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Hydrating,
    Ready,
}

/// A mutation received before hydration finished.
#[derive(Debug)]
enum Intent {
    Add(City),
    Remove(String),
    Reorder { from: usize, to: usize },
}

/// Owner of the watch list.
pub struct WatchListStore {
    storage: Arc<dyn KeyValueStore>,
    storage_key: String,
    cities: Vec<City>,
    lifecycle: Lifecycle,
    pending: VecDeque<Intent>,
    writer: SnapshotWriter,
    notifier: Arc<dyn Notifier>,
    changes: watch::Sender<Vec<City>>,
}

impl WatchListStore {
    pub(crate) fn new(
        storage: Arc<dyn KeyValueStore>,
        storage_key: String,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let writer = SnapshotWriter::spawn(Arc::clone(&storage), storage_key.clone());
        let (changes, _) = watch::channel(Vec::new());

        Self {
            storage,
            storage_key,
            cities: Vec::new(),
            lifecycle: Lifecycle::Hydrating,
            pending: VecDeque::new(),
            writer,
            notifier,
            changes,
        }
    }

    /// Loads the persisted snapshot and replays queued mutations.
    ///
    /// Read failures and malformed snapshots are logged and yield an empty
    /// list. Returns the outcomes of replayed mutations in the order they were
    /// issued. Calling this on a `Ready` store does nothing.
    pub async fn hydrate(&mut self) -> Vec<Outcome> {
        if self.lifecycle == Lifecycle::Ready {
            return Vec::new();
        }

        self.cities = match self.storage.get(&self.storage_key).await {
            Ok(Some(raw)) => snapshot::decode(&raw).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read watch list, starting empty: {e}");
                Vec::new()
            }
        };
        self.lifecycle = Lifecycle::Ready;
        log::debug!("Hydrated watch list with {} cities", self.cities.len());
        self.publish();

        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            log::debug!("Replaying {} queued mutations", pending.len());
        }
        pending
            .into_iter()
            .map(|intent| match intent {
                Intent::Add(city) => Outcome::Add(self.apply_add(city)),
                Intent::Remove(id) => Outcome::Remove(self.apply_remove(&id)),
                Intent::Reorder { from, to } => Outcome::Reorder(self.apply_reorder(from, to)),
            })
            .collect()
    }

    /// Appends `city` unless a city with the same ID is already watched.
    pub fn add(&mut self, city: City) -> AddOutcome {
        if self.lifecycle == Lifecycle::Hydrating {
            self.pending.push_back(Intent::Add(city));
            return AddOutcome::Queued;
        }
        self.apply_add(city)
    }

    /// Removes the city with the given ID, if watched.
    pub fn remove(&mut self, id: &str) -> RemoveOutcome {
        if self.lifecycle == Lifecycle::Hydrating {
            self.pending.push_back(Intent::Remove(id.to_string()));
            return RemoveOutcome::Queued;
        }
        self.apply_remove(id)
    }

    /// Moves the city at `from` so that it ends up at index `to`.
    ///
    /// `from` indexes the current list and `to` the list after the city has
    /// been taken out. Rejected when the list is empty, the indices are equal,
    /// or either index is out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> ReorderOutcome {
        if self.lifecycle == Lifecycle::Hydrating {
            self.pending.push_back(Intent::Reorder { from, to });
            return ReorderOutcome::Queued;
        }
        self.apply_reorder(from, to)
    }

    /// A copy of the current watch list, in display order.
    pub fn list(&self) -> Vec<City> {
        self.cities.clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cities.iter().any(|city| city.id == id)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Subscribes to list changes.
    ///
    /// The receiver holds the current list and is updated after hydration
    /// and after every successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<City>> {
        self.changes.subscribe()
    }

    /// Waits until every snapshot issued so far has been written (or failed).
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    fn apply_add(&mut self, city: City) -> AddOutcome {
        let outcome = if self.contains(&city.id) {
            AddOutcome::AlreadyPresent(city)
        } else {
            self.cities.push(city.clone());
            self.commit();
            AddOutcome::Added(city)
        };

        if let Some(notice) = Notice::for_add(&outcome) {
            self.notifier.notify(&notice);
        }
        outcome
    }

    fn apply_remove(&mut self, id: &str) -> RemoveOutcome {
        let Some(index) = self.cities.iter().position(|city| city.id == id) else {
            return RemoveOutcome::NotFound;
        };

        let removed = self.cities.remove(index);
        self.commit();

        let outcome = RemoveOutcome::Removed(removed);
        if let Some(notice) = Notice::for_remove(&outcome) {
            self.notifier.notify(&notice);
        }
        outcome
    }

    fn apply_reorder(&mut self, from: usize, to: usize) -> ReorderOutcome {
        let len = self.cities.len();
        if len == 0 || from == to || from >= len || to >= len {
            return ReorderOutcome::Rejected;
        }

        let city = self.cities.remove(from);
        self.cities.insert(to, city);
        self.commit();
        ReorderOutcome::Reordered
    }

    /// Persists and publishes the current list after a successful mutation.
    fn commit(&mut self) {
        match snapshot::encode(&self.cities) {
            Ok(payload) => self.writer.submit(payload),
            Err(e) => log::warn!("Failed to serialize watch list: {e}"),
        }
        self.publish();
    }

    fn publish(&self) {
        self.changes.send_replace(self.cities.clone());
    }
}

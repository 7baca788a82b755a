//! Background task that writes snapshots to storage one at a time.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::storage::KeyValueStore;

enum WriteCommand {
    Persist(String),
    Flush(oneshot::Sender<()>),
}

/// Handle to the snapshot writer task.
///
/// Submitted snapshots are written in FIFO order with at most one write in
/// flight, so the last submitted snapshot is always the last one stored.
/// The task exits once every handle is dropped and the queue is drained.
pub(crate) struct SnapshotWriter {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl SnapshotWriter {
    /// Spawns the writer on the current tokio runtime.
    pub(crate) fn spawn(storage: Arc<dyn KeyValueStore>, key: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    WriteCommand::Persist(payload) => {
                        if let Err(e) = storage.set(&key, &payload).await {
                            log::warn!("Failed to persist watch-list snapshot: {e}");
                        } else {
                            log::debug!("Persisted watch-list snapshot ({} bytes)", payload.len());
                        }
                    }
                    WriteCommand::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
            log::debug!("Snapshot writer stopped");
        });

        Self { tx }
    }

    /// Queues a snapshot without waiting for it to be written.
    pub(crate) fn submit(&self, payload: String) {
        if self.tx.send(WriteCommand::Persist(payload)).is_err() {
            log::warn!("Snapshot writer has stopped; change was not persisted");
        }
    }

    /// Waits until every snapshot submitted before this call was attempted.
    pub(crate) async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

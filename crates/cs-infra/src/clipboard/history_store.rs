//! In-memory clipboard history.
//!
//! The current [`HistorySnapshot`] sits behind an `RwLock`. Writers build the
//! next snapshot and swap it in whole; readers clone the `Arc`-backed snapshot
//! and release the lock immediately.

use std::sync::{PoisonError, RwLock};

use cs_core::history::{HistorySnapshot, HistoryUpdate, DEFAULT_HISTORY_CAPACITY};
use cs_core::ports::ClipboardHistoryPort;
use cs_core::ClipboardItem;
use tokio::sync::broadcast;
use tracing::{debug, trace};

const UPDATE_CHANNEL_CAPACITY: usize = 64;

pub struct InMemoryHistoryStore {
    current: RwLock<HistorySnapshot>,
    capacity: usize,
    updates: broadcast::Sender<HistoryUpdate>,
}

impl InMemoryHistoryStore {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            current: RwLock::new(HistorySnapshot::empty()),
            capacity: capacity.max(1),
            updates,
        }
    }

    fn replace_with(
        &self,
        build: impl FnOnce(&HistorySnapshot) -> HistorySnapshot,
    ) -> HistorySnapshot {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = build(&current);
        *current = next.clone();

        // Sent under the write lock so notifications keep mutation order.
        // An error only means nobody is subscribed.
        if self.updates.send(HistoryUpdate::new(next.clone())).is_err() {
            trace!("history update dropped, no subscribers");
        }
        next
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ClipboardHistoryPort for InMemoryHistoryStore {
    fn insert(&self, item: ClipboardItem) -> HistorySnapshot {
        let kind = item.kind();
        let next = self.replace_with(|current| current.prepend(item, self.capacity));
        debug!(%kind, len = next.len(), capacity = self.capacity, "history item inserted");
        next
    }

    fn snapshot(&self) -> HistorySnapshot {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        self.replace_with(|_| HistorySnapshot::empty());
        debug!("history cleared");
    }

    fn subscribe(&self) -> broadcast::Receiver<HistoryUpdate> {
        self.updates.subscribe()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

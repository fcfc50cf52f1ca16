//! Bounded clipboard history model.
//!
//! [`HistorySnapshot`] is an immutable, newest-first view of the history.
//! Stores never edit a snapshot in place: every mutation builds a new one
//! and swaps it in, so a reader holding a snapshot always sees a complete
//! list.

use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::clipboard::ClipboardItem;

/// Maximum number of entries kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Name of the notification emitted after every history mutation.
pub const HISTORY_UPDATE_EVENT: &str = "clipboard-update";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot(Arc<[ClipboardItem]>);

impl Default for HistorySnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl HistorySnapshot {
    pub fn empty() -> Self {
        Self(Arc::from(Vec::<ClipboardItem>::new()))
    }

    pub fn from_items(items: Vec<ClipboardItem>) -> Self {
        Self(Arc::from(items))
    }

    /// Returns a new snapshot with `item` at index 0, truncated to `capacity`.
    pub fn prepend(&self, item: ClipboardItem, capacity: usize) -> Self {
        let keep = self.0.len().min(capacity.saturating_sub(1));
        let mut items = Vec::with_capacity(keep + 1);
        items.push(item);
        items.extend(self.0[..keep].iter().cloned());
        items.truncate(capacity);
        Self::from_items(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[ClipboardItem] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClipboardItem> {
        self.0.iter()
    }

    pub fn newest(&self) -> Option<&ClipboardItem> {
        self.0.first()
    }

    pub fn to_vec(&self) -> Vec<ClipboardItem> {
        self.0.to_vec()
    }
}

impl<'a> IntoIterator for &'a HistorySnapshot {
    type Item = &'a ClipboardItem;
    type IntoIter = std::slice::Iter<'a, ClipboardItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for HistorySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Payload of the [`HISTORY_UPDATE_EVENT`] notification: the full history
/// right after the mutation that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryUpdate {
    pub history: HistorySnapshot,
}

impl HistoryUpdate {
    pub fn new(history: HistorySnapshot) -> Self {
        Self { history }
    }

    pub fn event_name(&self) -> &'static str {
        HISTORY_UPDATE_EVENT
    }
}

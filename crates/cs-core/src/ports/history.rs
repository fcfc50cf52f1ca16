//! History store port.

use tokio::sync::broadcast;

use crate::clipboard::ClipboardItem;
use crate::history::{HistorySnapshot, HistoryUpdate};

/// Bounded, newest-first clipboard history shared by the change detector
/// (writer) and the UI collaborator (reader).
///
/// # Behavior
/// - Every mutation replaces the whole sequence at once; `snapshot()` never
///   observes a half-applied insert or clear.
/// - After every mutation a [`HistoryUpdate`] carrying the new full history
///   is broadcast, in mutation order.
/// - `len() <= capacity()` always holds.
pub trait ClipboardHistoryPort: Send + Sync {
    /// Prepends `item`, drops entries past capacity, notifies subscribers and
    /// returns the new history.
    fn insert(&self, item: ClipboardItem) -> HistorySnapshot;

    fn snapshot(&self) -> HistorySnapshot;

    /// Empties the history and notifies subscribers.
    fn clear(&self);

    fn subscribe(&self) -> broadcast::Receiver<HistoryUpdate>;

    fn capacity(&self) -> usize;
}

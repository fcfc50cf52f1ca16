use std::sync::Arc;

use cs_core::history::HistoryUpdate;
use cs_core::ports::ClipboardHistoryPort;
use tokio::sync::broadcast;

/// New receiver for `clipboard-update` notifications.
///
/// Only mutations after the call are delivered; pair it with
/// [`GetClipboardHistory`](super::GetClipboardHistory) for the initial state.
pub struct SubscribeHistory {
    history: Arc<dyn ClipboardHistoryPort>,
}

impl SubscribeHistory {
    pub fn from_port(history: Arc<dyn ClipboardHistoryPort>) -> Self {
        Self { history }
    }

    pub fn execute(&self) -> broadcast::Receiver<HistoryUpdate> {
        self.history.subscribe()
    }
}

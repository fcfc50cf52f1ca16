use std::sync::Arc;

use cs_core::ports::ClipboardHistoryPort;
use tracing::{info, info_span};

/// Empties the history. The store notifies subscribers with an empty
/// snapshot.
pub struct ClearHistory {
    history: Arc<dyn ClipboardHistoryPort>,
}

impl ClearHistory {
    pub fn from_port(history: Arc<dyn ClipboardHistoryPort>) -> Self {
        Self { history }
    }

    pub fn execute(&self) {
        let _span = info_span!("usecase.clear_history.execute").entered();
        self.history.clear();
        info!("Clipboard history cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{text_item, MockHistory};
    use cs_core::ports::ClipboardHistoryPort;
    use cs_infra::InMemoryHistoryStore;

    #[test]
    fn test_delegates_to_store() {
        let mut history = MockHistory::new();
        history.expect_clear().times(1).return_const(());

        ClearHistory::from_port(Arc::new(history)).execute();
    }

    #[tokio::test]
    async fn test_clearing_fifty_items_notifies_with_empty_history() {
        let store = Arc::new(InMemoryHistoryStore::default());
        for i in 0..50 {
            store.insert(text_item(&format!("item {i}")));
        }
        let mut updates = store.subscribe();

        ClearHistory::from_port(store.clone()).execute();

        assert!(store.snapshot().is_empty());
        let update = updates.recv().await.unwrap();
        assert_eq!(update.event_name(), "clipboard-update");
        assert!(update.history.is_empty());
    }
}

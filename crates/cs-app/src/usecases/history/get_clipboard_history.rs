use std::sync::Arc;

use cs_core::history::HistorySnapshot;
use cs_core::ports::ClipboardHistoryPort;
use tracing::debug;

/// Current history, newest first.
pub struct GetClipboardHistory {
    history: Arc<dyn ClipboardHistoryPort>,
}

impl GetClipboardHistory {
    pub fn from_port(history: Arc<dyn ClipboardHistoryPort>) -> Self {
        Self { history }
    }

    pub fn execute(&self) -> HistorySnapshot {
        let snapshot = self.history.snapshot();
        debug!(len = snapshot.len(), "Read clipboard history");
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{text_item, MockHistory};

    #[test]
    fn test_returns_store_snapshot() {
        let expected = HistorySnapshot::from_items(vec![text_item("b"), text_item("a")]);
        let returned = expected.clone();

        let mut history = MockHistory::new();
        history
            .expect_snapshot()
            .times(1)
            .returning(move || returned.clone());

        let use_case = GetClipboardHistory::from_port(Arc::new(history));

        assert_eq!(use_case.execute(), expected);
    }
}

//! Mock ports shared by the use case tests.

use chrono::{TimeZone, Utc};
use cs_core::ports::{ClipboardAccessError, ClipboardHistoryPort, SystemClipboardPort};
use cs_core::{ClipboardItem, HistorySnapshot, HistoryUpdate};
use mockall::mock;
use tokio::sync::broadcast;

mock! {
    pub Clipboard {}

    impl SystemClipboardPort for Clipboard {
        fn read_text(&self) -> Result<Option<String>, ClipboardAccessError>;
        fn read_image(&self) -> Result<Option<Vec<u8>>, ClipboardAccessError>;
        fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError>;
    }
}

mock! {
    pub History {}

    impl ClipboardHistoryPort for History {
        fn insert(&self, item: ClipboardItem) -> HistorySnapshot;
        fn snapshot(&self) -> HistorySnapshot;
        fn clear(&self);
        fn subscribe(&self) -> broadcast::Receiver<HistoryUpdate>;
        fn capacity(&self) -> usize;
    }
}

pub fn text_item(text: &str) -> ClipboardItem {
    ClipboardItem::text(text, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()).unwrap()
}

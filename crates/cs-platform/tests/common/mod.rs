//! Shared fakes for the clipboard watcher tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use cs_core::image::{encode_dib, PixelGrid};
use cs_core::ports::{ClipboardAccessError, ClockPort, SystemClipboardPort};
use cs_infra::{InMemoryHistoryStore, Md5Hasher, PngImageEncoder};
use cs_platform::{ClipboardWatcher, WatcherDeps};

type Slot<T> = Mutex<Result<Option<T>, ClipboardAccessError>>;

/// In-memory clipboard whose contents the test sets directly.
pub struct FakeClipboard {
    text: Slot<String>,
    image: Slot<Vec<u8>>,
    text_reads: AtomicUsize,
    image_reads: AtomicUsize,
}

impl Default for FakeClipboard {
    fn default() -> Self {
        Self {
            text: Mutex::new(Ok(None)),
            image: Mutex::new(Ok(None)),
            text_reads: AtomicUsize::new(0),
            image_reads: AtomicUsize::new(0),
        }
    }
}

impl FakeClipboard {
    pub fn set_text(&self, text: &str) {
        *self.text.lock().unwrap() = Ok(Some(text.to_string()));
    }

    pub fn clear_text(&self) {
        *self.text.lock().unwrap() = Ok(None);
    }

    pub fn fail_text(&self) {
        *self.text.lock().unwrap() = Err(ClipboardAccessError::Access("busy".into()));
    }

    pub fn set_image(&self, raw: Vec<u8>) {
        *self.image.lock().unwrap() = Ok(Some(raw));
    }

    pub fn clear_image(&self) {
        *self.image.lock().unwrap() = Ok(None);
    }

    pub fn fail_image(&self) {
        *self.image.lock().unwrap() = Err(ClipboardAccessError::Access("locked".into()));
    }

    pub fn image_reads(&self) -> usize {
        self.image_reads.load(Ordering::SeqCst)
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardAccessError> {
        self.text_reads.fetch_add(1, Ordering::SeqCst);
        self.text.lock().unwrap().clone()
    }

    fn read_image(&self) -> Result<Option<Vec<u8>>, ClipboardAccessError> {
        self.image_reads.fetch_add(1, Ordering::SeqCst);
        self.image.lock().unwrap().clone()
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        self.set_text(text);
        Ok(())
    }
}

pub struct FixedClock;

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }
}

pub struct Harness {
    pub clipboard: Arc<FakeClipboard>,
    pub history: Arc<InMemoryHistoryStore>,
    pub deps: WatcherDeps,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let history = Arc::new(InMemoryHistoryStore::new(capacity));
        let deps = WatcherDeps {
            encoder: Arc::new(PngImageEncoder),
            hasher: Arc::new(Md5Hasher),
            history: history.clone(),
            clock: Arc::new(FixedClock),
        };
        Self {
            clipboard: Arc::new(FakeClipboard::default()),
            history,
            deps,
        }
    }

    pub fn watcher(&self) -> ClipboardWatcher<FakeClipboard> {
        ClipboardWatcher::new(self.clipboard.clone(), self.deps.clone())
    }

    pub fn history_contents(&self) -> Vec<String> {
        use cs_core::ports::ClipboardHistoryPort;
        self.history
            .snapshot()
            .iter()
            .map(|item| item.content().to_string())
            .collect()
    }
}

/// A `width`x`height` bottom-up DIB filled with one RGBA colour.
pub fn solid_dib(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let pixels = rgba.repeat((width * height) as usize);
    encode_dib(&PixelGrid::from_raw(width, height, pixels).unwrap())
}

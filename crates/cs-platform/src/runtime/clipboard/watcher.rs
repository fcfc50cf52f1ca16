//! Clipboard change detector
//!
//! One [`ClipboardWatcher::check_once`] call is one detection pass:
//!
//! ```text
//! SystemClipboardPort::read_text
//!      ↓ new, non-empty text?  ── yes ──→ Text item → history (image skipped)
//!      ↓ no
//! SystemClipboardPort::read_image
//!      ↓ raw DIB fingerprint changed?
//! capture_image (decode → PNG → hash)
//!      ↓ hash changed?
//! Image item → history
//! ```
//!
//! At most one item is produced per pass. Every failure along the way is
//! logged at debug level and turns the pass into [`TickOutcome::Unchanged`];
//! the next pass starts from a clean slate.
//!
//! The watcher owns its last-seen state. It is driven by a single task and
//! never shared with readers of the history.

use std::sync::Arc;

use cs_core::image::capture_image;
use cs_core::ports::{
    ClipboardHistoryPort, ClockPort, ContentHashPort, ImageEncoderPort, SystemClipboardPort,
};
use cs_core::{ClipboardItem, ContentHash};
use tracing::{debug, trace};

/// What a single detection pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Unchanged,
    CapturedText,
    CapturedImage,
}

/// Collaborators of the watcher, other than the clipboard itself.
#[derive(Clone)]
pub struct WatcherDeps {
    pub encoder: Arc<dyn ImageEncoderPort>,
    pub hasher: Arc<dyn ContentHashPort>,
    pub history: Arc<dyn ClipboardHistoryPort>,
    pub clock: Arc<dyn ClockPort>,
}

#[derive(Debug, Default)]
struct WatcherState {
    last_text: Option<String>,
    last_image_hash: Option<ContentHash>,
    /// Digest of the raw DIB bytes last looked at, decodable or not.
    last_image_fingerprint: Option<ContentHash>,
}

pub struct ClipboardWatcher<C>
where
    C: SystemClipboardPort,
{
    clipboard: Arc<C>,
    deps: WatcherDeps,
    state: WatcherState,
}

impl<C> ClipboardWatcher<C>
where
    C: SystemClipboardPort,
{
    pub fn new(clipboard: Arc<C>, deps: WatcherDeps) -> Self {
        Self {
            clipboard,
            deps,
            state: WatcherState::default(),
        }
    }

    /// Runs one detection pass. Never fails.
    pub fn check_once(&mut self) -> TickOutcome {
        if let Some(text) = self.novel_text() {
            return self.capture_text(text);
        }
        self.check_image()
    }

    fn novel_text(&self) -> Option<String> {
        match self.clipboard.read_text() {
            Ok(Some(text)) if text.is_empty() => None,
            Ok(Some(text)) if self.state.last_text.as_deref() == Some(text.as_str()) => None,
            Ok(Some(text)) => Some(text),
            Ok(None) => None,
            Err(err) => {
                debug!(error = %err, "clipboard text read failed");
                None
            }
        }
    }

    fn capture_text(&mut self, text: String) -> TickOutcome {
        let item = match ClipboardItem::text(text.as_str(), self.deps.clock.now()) {
            Ok(item) => item,
            Err(err) => {
                debug!(error = %err, "text item rejected");
                return TickOutcome::Unchanged;
            }
        };

        debug!(preview = %item.preview(32), "clipboard text captured");
        self.deps.history.insert(item);
        self.state.last_text = Some(text);
        TickOutcome::CapturedText
    }

    fn check_image(&mut self) -> TickOutcome {
        let raw = match self.clipboard.read_image() {
            Ok(Some(raw)) => raw,
            Ok(None) => return TickOutcome::Unchanged,
            Err(err) => {
                debug!(error = %err, "clipboard image read failed");
                return TickOutcome::Unchanged;
            }
        };

        let fingerprint = match self.deps.hasher.hash_bytes(&raw) {
            Ok(fingerprint) => fingerprint,
            Err(err) => {
                debug!(error = %err, "raw image fingerprint failed");
                return TickOutcome::Unchanged;
            }
        };
        if self.state.last_image_fingerprint.as_ref() == Some(&fingerprint) {
            trace!("clipboard image bytes unchanged");
            return TickOutcome::Unchanged;
        }
        // Decoding is deterministic: the same bytes fail the same way, so a
        // failed payload is remembered too and not retried every pass.
        self.state.last_image_fingerprint = Some(fingerprint);

        let captured = match capture_image(
            &raw,
            self.deps.encoder.as_ref(),
            self.deps.hasher.as_ref(),
        ) {
            Ok(captured) => captured,
            Err(err) => {
                debug!(error = %err, size_bytes = raw.len(), "clipboard image skipped");
                return TickOutcome::Unchanged;
            }
        };

        if self.state.last_image_hash.as_ref() == Some(&captured.hash) {
            return TickOutcome::Unchanged;
        }

        let item = match ClipboardItem::image(captured.data_uri, self.deps.clock.now()) {
            Ok(item) => item,
            Err(err) => {
                debug!(error = %err, "image item rejected");
                return TickOutcome::Unchanged;
            }
        };

        debug!(
            width = captured.width,
            height = captured.height,
            hash = %captured.hash,
            "clipboard image captured"
        );
        self.deps.history.insert(item);
        self.state.last_image_hash = Some(captured.hash);
        TickOutcome::CapturedImage
    }
}

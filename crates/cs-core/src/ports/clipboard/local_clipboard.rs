//! Clipboard port - abstracts local clipboard access
//!
//! Calls are synchronous and may block briefly while the OS clipboard is
//! held by another process; async callers should go through
//! `spawn_blocking`.

use crate::ports::ClipboardAccessError;

/// Platform-agnostic access to the system clipboard.
///
/// `Ok(None)` means the format is simply not on the clipboard right now.
/// That is the common case and not an error.
pub trait SystemClipboardPort: Send + Sync {
    /// Current plain text, if any.
    fn read_text(&self) -> Result<Option<String>, ClipboardAccessError>;

    /// Current bitmap as raw device-independent bitmap bytes, if any.
    fn read_image(&self) -> Result<Option<Vec<u8>>, ClipboardAccessError>;

    /// Replaces the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError>;
}

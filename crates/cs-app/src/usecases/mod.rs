//! Use cases invoked by the UI collaborator.
//!
//! ```text
//! [ClipboardWatcher] ──insert──→ ClipboardHistoryPort ──notify──→ SubscribeHistory
//!                                     ↑
//! GetClipboardHistory / ClearHistory ─┘
//!
//! GetClipboardText / GetClipboardImage / SetClipboardText → SystemClipboardPort
//! ```
//!
//! Writes go straight to the clipboard. The watcher picks the written text
//! up on its next pass like any other change.

pub mod clipboard;
pub mod history;

pub use clipboard::{GetClipboardImage, GetClipboardText, SetClipboardText, SetClipboardTextError};
pub use history::{ClearHistory, GetClipboardHistory, SubscribeHistory};

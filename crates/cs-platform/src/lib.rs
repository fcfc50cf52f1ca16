//! # cs-platform
//!
//! Platform-specific implementations for clipshelf.
//!
//! This crate talks to the operating system clipboard and drives the
//! clipboard change detector. It depends only on the ports and models of
//! `cs-core`; concrete codecs, hashers and stores are injected.

pub mod clipboard;
pub mod ports;
pub mod runtime;

pub use clipboard::LocalClipboard;
pub use ports::ClipboardRuntimePort;
pub use runtime::clipboard::{
    ClipboardWatcher, PollingClipboardRuntime, TickOutcome, WatcherDeps, DEFAULT_POLL_INTERVAL,
};

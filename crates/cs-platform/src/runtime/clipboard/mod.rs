mod runtime;
mod watcher;

pub use runtime::{PollingClipboardRuntime, DEFAULT_POLL_INTERVAL};
pub use watcher::{ClipboardWatcher, TickOutcome, WatcherDeps};

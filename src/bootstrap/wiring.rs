//! # Dependency Injection
//!
//! The only place that depends on `cs-infra`, `cs-platform` and `cs-app`
//! together. Assembly only: settings are already validated, and no
//! decision is taken here.

use std::sync::Arc;

use cs_app::AppDeps;
use cs_core::ports::{ClipboardHistoryPort, ImageEncoderPort, SystemClipboardPort};
use cs_infra::{hasher_for, InMemoryHistoryStore, PngImageEncoder, SystemClock};
use cs_platform::{
    ClipboardRuntimePort, ClipboardWatcher, LocalClipboard, PollingClipboardRuntime, WatcherDeps,
};
use tracing::info;

use super::config::Settings;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Everything the binary drives: the use case dependencies and the
/// background watcher feeding the same history.
pub struct AppRuntime {
    pub deps: AppDeps,
    pub watcher: Arc<dyn ClipboardRuntimePort>,
}

/// Wires the application against the system clipboard.
pub fn wire_dependencies(settings: &Settings) -> WiringResult<AppRuntime> {
    let clipboard = LocalClipboard::new()
        .map_err(|e| WiringError::ClipboardInit(format!("{e:#}")))?;
    Ok(wire_with_clipboard(Arc::new(clipboard), settings))
}

/// Wires the application against any clipboard adapter.
pub fn wire_with_clipboard<C>(clipboard: Arc<C>, settings: &Settings) -> AppRuntime
where
    C: SystemClipboardPort + 'static,
{
    let history: Arc<dyn ClipboardHistoryPort> =
        Arc::new(InMemoryHistoryStore::new(settings.history_capacity));
    let hasher = hasher_for(settings.hash_algorithm);
    let image_encoder: Arc<dyn ImageEncoderPort> = Arc::new(PngImageEncoder);

    let watcher_deps = WatcherDeps {
        encoder: image_encoder.clone(),
        hasher: hasher.clone(),
        history: history.clone(),
        clock: Arc::new(SystemClock),
    };
    let watcher = PollingClipboardRuntime::new(
        ClipboardWatcher::new(clipboard.clone(), watcher_deps),
        settings.poll_interval,
    );

    info!(
        capacity = settings.history_capacity,
        hash = settings.hash_algorithm.as_str(),
        poll_interval_ms = settings.poll_interval.as_millis() as u64,
        "dependencies wired"
    );

    let clipboard: Arc<dyn SystemClipboardPort> = clipboard;
    AppRuntime {
        deps: AppDeps {
            clipboard,
            image_encoder,
            hasher,
            history,
        },
        watcher: Arc::new(watcher),
    }
}

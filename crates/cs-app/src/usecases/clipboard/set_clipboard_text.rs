//! Use case for writing text to the clipboard

use std::sync::Arc;

use cs_core::ports::{ClipboardAccessError, SystemClipboardPort};
use tokio::task::spawn_blocking;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SetClipboardTextError {
    #[error("Clipboard unavailable: {0}")]
    Access(String),

    #[error("Failed to write clipboard: {0}")]
    Write(String),

    #[error("Clipboard task failed: {0}")]
    Task(String),
}

impl From<ClipboardAccessError> for SetClipboardTextError {
    fn from(err: ClipboardAccessError) -> Self {
        match err {
            ClipboardAccessError::Access(msg) => SetClipboardTextError::Access(msg),
            ClipboardAccessError::Write(msg) => SetClipboardTextError::Write(msg),
        }
    }
}

/// Replaces the clipboard contents with text.
///
/// Bypasses the watcher; failures are returned to the caller.
pub struct SetClipboardText {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl SetClipboardText {
    pub fn from_port(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    #[tracing::instrument(
        name = "usecase.set_clipboard_text.execute",
        skip(self, text),
        fields(len = text.len())
    )]
    pub async fn execute(&self, text: &str) -> Result<(), SetClipboardTextError> {
        let clipboard = Arc::clone(&self.clipboard);
        let text = text.to_string();
        spawn_blocking(move || clipboard.write_text(&text))
            .await
            .map_err(|e| SetClipboardTextError::Task(e.to_string()))??;

        info!("Clipboard text written");
        Ok(())
    }
}

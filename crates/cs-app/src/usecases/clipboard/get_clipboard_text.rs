//! Use case for reading the current clipboard text

use std::sync::Arc;

use cs_core::ports::SystemClipboardPort;
use tokio::task::spawn_blocking;
use tracing::{debug, info_span, warn, Instrument};

/// Returns the current clipboard text.
///
/// Never fails: an empty clipboard, a non-text clipboard and an access error
/// all yield `""`. Errors are logged.
pub struct GetClipboardText {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl GetClipboardText {
    pub fn from_port(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    pub async fn execute(&self) -> String {
        let span = info_span!("usecase.get_clipboard_text.execute");

        async {
            let clipboard = Arc::clone(&self.clipboard);
            match spawn_blocking(move || clipboard.read_text()).await {
                Ok(Ok(Some(text))) => text,
                Ok(Ok(None)) => {
                    debug!("No text on clipboard");
                    String::new()
                }
                Ok(Err(err)) => {
                    warn!(error = %err, "Failed to read clipboard text");
                    String::new()
                }
                Err(err) => {
                    warn!(error = %err, "Clipboard read task failed");
                    String::new()
                }
            }
        }
        .instrument(span)
        .await
    }
}

//! Use case for reading the current clipboard image

use std::sync::Arc;

use cs_core::image::{capture_image, CapturedImage};
use cs_core::ports::{ContentHashPort, ImageEncoderPort, SystemClipboardPort};
use tokio::task::spawn_blocking;
use tracing::{debug, info_span, warn, Instrument};

/// Returns the current clipboard image as a `data:image/png;base64,` URI.
///
/// `""` when there is no image or it cannot be decoded, the same contract as
/// [`GetClipboardText`](super::GetClipboardText).
pub struct GetClipboardImage {
    clipboard: Arc<dyn SystemClipboardPort>,
    encoder: Arc<dyn ImageEncoderPort>,
    hasher: Arc<dyn ContentHashPort>,
}

impl GetClipboardImage {
    pub fn from_ports(
        clipboard: Arc<dyn SystemClipboardPort>,
        encoder: Arc<dyn ImageEncoderPort>,
        hasher: Arc<dyn ContentHashPort>,
    ) -> Self {
        Self {
            clipboard,
            encoder,
            hasher,
        }
    }

    pub async fn execute(&self) -> String {
        let span = info_span!("usecase.get_clipboard_image.execute");

        async {
            let clipboard = Arc::clone(&self.clipboard);
            let encoder = Arc::clone(&self.encoder);
            let hasher = Arc::clone(&self.hasher);

            let result = spawn_blocking(move || -> Result<Option<CapturedImage>, String> {
                let Some(raw) = clipboard.read_image().map_err(|e| e.to_string())? else {
                    return Ok(None);
                };
                capture_image(&raw, encoder.as_ref(), hasher.as_ref())
                    .map(Some)
                    .map_err(|e| e.to_string())
            })
            .await;

            match result {
                Ok(Ok(Some(captured))) => {
                    debug!(
                        width = captured.width,
                        height = captured.height,
                        "Read clipboard image"
                    );
                    captured.data_uri
                }
                Ok(Ok(None)) => String::new(),
                Ok(Err(err)) => {
                    warn!(error = %err, "Failed to read clipboard image");
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

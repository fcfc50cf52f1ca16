use std::error::Error;

use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use cs_core::image::{encode_dib, PixelGrid};
use cs_core::ports::ClipboardAccessError;
use tracing::trace;

type ClipboardRsError = Box<dyn Error + Send + Sync>;

fn access_err(err: ClipboardRsError) -> ClipboardAccessError {
    ClipboardAccessError::Access(err.to_string())
}

/// Clipboard operations shared by every `clipboard-rs` backed adapter.
pub struct CommonClipboardImpl;

impl CommonClipboardImpl {
    pub fn read_text(ctx: &ClipboardContext) -> Result<Option<String>, ClipboardAccessError> {
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        ctx.get_text().map(Some).map_err(access_err)
    }

    /// Reads the clipboard image and re-packs it as a 32bpp DIB, so every
    /// platform hands the same raw format to the image pipeline.
    #[cfg_attr(target_os = "windows", allow(dead_code))]
    pub fn read_image_as_dib(
        ctx: &ClipboardContext,
    ) -> Result<Option<Vec<u8>>, ClipboardAccessError> {
        if !ctx.has(ContentFormat::Image) {
            return Ok(None);
        }

        let image = ctx.get_image().map_err(access_err)?;
        let rgba = image.to_rgba8().map_err(access_err)?;
        let (width, height) = rgba.dimensions();
        trace!(width, height, "clipboard image fetched");

        let grid = PixelGrid::from_raw(width, height, rgba.into_raw())
            .map_err(|e| ClipboardAccessError::Access(e.to_string()))?;
        Ok(Some(encode_dib(&grid)))
    }

    pub fn write_text(ctx: &ClipboardContext, text: &str) -> Result<(), ClipboardAccessError> {
        ctx.set_text(text.to_string())
            .map_err(|e| ClipboardAccessError::Write(e.to_string()))
    }
}

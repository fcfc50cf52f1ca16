use super::super::common::CommonClipboardImpl;
use anyhow::Result;
use clipboard_rs::ClipboardContext;
use cs_core::ports::{ClipboardAccessError, SystemClipboardPort};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, debug_span};

/// macOS clipboard implementation using clipboard-rs
pub struct MacOSClipboard {
    inner: Mutex<ClipboardContext>,
}

impl MacOSClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow::anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }

    fn ctx(&self) -> MutexGuard<'_, ClipboardContext> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SystemClipboardPort for MacOSClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardAccessError> {
        CommonClipboardImpl::read_text(&self.ctx())
    }

    fn read_image(&self) -> Result<Option<Vec<u8>>, ClipboardAccessError> {
        let span = debug_span!("platform.macos.read_image");
        span.in_scope(|| {
            let dib = CommonClipboardImpl::read_image_as_dib(&self.ctx())?;
            if let Some(dib) = &dib {
                debug!(size_bytes = dib.len(), "Captured clipboard image");
            }
            Ok(dib)
        })
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        let span = debug_span!("platform.macos.write_text", len = text.len());
        span.in_scope(|| {
            CommonClipboardImpl::write_text(&self.ctx(), text)?;
            debug!("Wrote text to system clipboard");
            Ok(())
        })
    }
}

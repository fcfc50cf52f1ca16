use super::super::common::CommonClipboardImpl;
use anyhow::{anyhow, Result};
use clipboard_rs::{ClipboardContext, ClipboardContextX11Options};
use cs_core::ports::{ClipboardAccessError, SystemClipboardPort};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::debug_span;

/// Upper bound for an X11 selection transfer, so a stuck owner costs one
/// tick instead of stalling the watcher.
const X11_READ_TIMEOUT: Duration = Duration::from_millis(500);

pub struct LinuxClipboard {
    inner: Mutex<ClipboardContext>,
}

impl LinuxClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new_with_options(ClipboardContextX11Options {
            read_timeout: Some(X11_READ_TIMEOUT),
        })
        .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }

    fn ctx(&self) -> MutexGuard<'_, ClipboardContext> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SystemClipboardPort for LinuxClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardAccessError> {
        CommonClipboardImpl::read_text(&self.ctx())
    }

    fn read_image(&self) -> Result<Option<Vec<u8>>, ClipboardAccessError> {
        debug_span!("platform.linux.read_image")
            .in_scope(|| CommonClipboardImpl::read_image_as_dib(&self.ctx()))
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        CommonClipboardImpl::write_text(&self.ctx(), text)
    }
}

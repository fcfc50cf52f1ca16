use super::super::common::CommonClipboardImpl;
use anyhow::Result;
use clipboard_rs::ClipboardContext;
use cs_core::ports::{ClipboardAccessError, SystemClipboardPort};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, debug_span, trace};

/// Windows clipboard implementation.
///
/// Text goes through clipboard-rs. Images are read as raw `CF_DIB` through
/// the Win32 API so the bytes reach the decoder untouched.
pub struct WindowsClipboard {
    inner: Mutex<ClipboardContext>,
}

impl WindowsClipboard {
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

impl SystemClipboardPort for WindowsClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardAccessError> {
        CommonClipboardImpl::read_text(&self.ctx())
    }

    fn read_image(&self) -> Result<Option<Vec<u8>>, ClipboardAccessError> {
        let span = debug_span!("platform.windows.read_dib");
        span.in_scope(|| {
            let dib = dib::read_dib()?;
            if let Some(bytes) = &dib {
                trace!(size_bytes = bytes.len(), "Copied CF_DIB from clipboard");
            }
            Ok(dib)
        })
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        let span = debug_span!("platform.windows.write_text", len = text.len());
        span.in_scope(|| {
            CommonClipboardImpl::write_text(&self.ctx(), text)?;
            debug!("Wrote text to system clipboard");
            Ok(())
        })
    }
}

mod dib {
    use cs_core::ports::ClipboardAccessError;
    use std::io;
    use std::marker::PhantomData;
    use std::ptr::null_mut;
    use winapi::shared::minwindef::HGLOBAL;
    use winapi::um::winbase::{GlobalLock, GlobalSize, GlobalUnlock};
    use winapi::um::winuser::{
        CloseClipboard, GetClipboardData, IsClipboardFormatAvailable, OpenClipboard, CF_DIB,
    };

    /// The clipboard, open for the current thread until dropped.
    struct OpenedClipboard {
        _not_send: PhantomData<*mut ()>,
    }

    impl OpenedClipboard {
        /// Single attempt. A clipboard held by another process fails now and
        /// is retried on the next tick.
        fn open() -> Result<Self, ClipboardAccessError> {
            // SAFETY: a null owner window associates the open clipboard with
            // the calling thread; the guard closes it from the same thread.
            if unsafe { OpenClipboard(null_mut()) } == 0 {
                return Err(ClipboardAccessError::Access(format!(
                    "OpenClipboard failed: {}",
                    io::Error::last_os_error()
                )));
            }
            Ok(Self {
                _not_send: PhantomData,
            })
        }
    }

    impl Drop for OpenedClipboard {
        fn drop(&mut self) {
            // SAFETY: the clipboard was opened by `open` on this thread.
            unsafe {
                CloseClipboard();
            }
        }
    }

    /// A locked global memory block owned by the open clipboard.
    ///
    /// Borrowing the clipboard guard makes the compiler drop (unlock) this
    /// before the clipboard can be closed.
    struct LockedGlobal<'clip> {
        handle: HGLOBAL,
        ptr: *const u8,
        len: usize,
        _clipboard: PhantomData<&'clip OpenedClipboard>,
    }

    impl<'clip> LockedGlobal<'clip> {
        fn lock(
            _clipboard: &'clip OpenedClipboard,
            handle: HGLOBAL,
        ) -> Result<Self, ClipboardAccessError> {
            // SAFETY: `handle` came from GetClipboardData while the clipboard
            // is open, which is what GlobalLock expects.
            let ptr = unsafe { GlobalLock(handle) } as *const u8;
            if ptr.is_null() {
                return Err(ClipboardAccessError::Access(format!(
                    "GlobalLock failed: {}",
                    io::Error::last_os_error()
                )));
            }
            // SAFETY: same handle, now locked.
            let len = unsafe { GlobalSize(handle) };
            Ok(Self {
                handle,
                ptr,
                len,
                _clipboard: PhantomData,
            })
        }

        fn as_bytes(&self) -> &[u8] {
            if self.len == 0 {
                return &[];
            }
            // SAFETY: `ptr` points at `len` readable bytes for as long as the
            // block stays locked, i.e. for the lifetime of `self`.
            unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
        }
    }

    impl Drop for LockedGlobal<'_> {
        fn drop(&mut self) {
            // SAFETY: balances the successful GlobalLock in `lock`.
            unsafe {
                GlobalUnlock(self.handle);
            }
        }
    }

    /// Copies the clipboard `CF_DIB` payload into an owned buffer.
    pub(super) fn read_dib() -> Result<Option<Vec<u8>>, ClipboardAccessError> {
        // Availability is checked without opening the clipboard.
        // SAFETY: plain query, no preconditions.
        if unsafe { IsClipboardFormatAvailable(CF_DIB) } == 0 {
            return Ok(None);
        }

        let clipboard = OpenedClipboard::open()?;

        // SAFETY: the clipboard is open on this thread.
        let handle = unsafe { GetClipboardData(CF_DIB) };
        if handle.is_null() {
            // format went away between the check and the open
            return Ok(None);
        }

        let locked = LockedGlobal::lock(&clipboard, handle as HGLOBAL)?;
        let bytes = locked.as_bytes().to_vec();

        drop(locked);
        drop(clipboard);
        Ok(Some(bytes))
    }
}

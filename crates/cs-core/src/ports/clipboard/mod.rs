mod local_clipboard;

pub use local_clipboard::SystemClipboardPort;

mod get_clipboard_image;
mod get_clipboard_text;
mod set_clipboard_text;

pub use get_clipboard_image::GetClipboardImage;
pub use get_clipboard_text::GetClipboardText;
pub use set_clipboard_text::{SetClipboardText, SetClipboardTextError};

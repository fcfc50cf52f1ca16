mod clear_history;
mod get_clipboard_history;
mod subscribe_history;

pub use clear_history::ClearHistory;
pub use get_clipboard_history::GetClipboardHistory;
pub use subscribe_history::SubscribeHistory;

mod common;
pub mod platform;

pub use platform::LocalClipboard;

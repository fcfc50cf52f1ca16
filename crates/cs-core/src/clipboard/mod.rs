//! Clipboard domain models.
mod hash;
mod item;

pub use hash::{ContentHash, HashAlgorithm};
pub use item::{ClipboardItem, ClipboardItemError, ClipboardKind};

#[cfg(test)]
mod tests;

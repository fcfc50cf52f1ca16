//! # cs-core
//!
//! Core domain models and business logic for clipshelf.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the clipboard record model, the bounded history snapshot, the
//! device-independent bitmap codec and the ports implemented by the
//! infrastructure and platform layers.

pub mod clipboard;
pub mod config;
pub mod history;
pub mod image;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardItem, ClipboardKind, ContentHash, HashAlgorithm};
pub use config::AppConfig;
pub use history::{HistorySnapshot, HistoryUpdate, DEFAULT_HISTORY_CAPACITY, HISTORY_UPDATE_EVENT};
pub use image::{EncodedImage, PixelGrid};

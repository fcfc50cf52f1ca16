//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core logic to remain independent of the OS
//! clipboard, codecs and hash functions.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs in `cs-core/ports` when it represents a capability used by
//! more than one layer and is implemented by the infrastructure or platform
//! layer. Helper traits private to one adapter stay with that adapter.

pub mod clipboard;
mod clock;
pub mod errors;
mod hash;
mod history;
mod image_encoder;

pub use clipboard::SystemClipboardPort;
pub use clock::ClockPort;
pub use errors::ClipboardAccessError;
pub use hash::ContentHashPort;
pub use history::ClipboardHistoryPort;
pub use image_encoder::ImageEncoderPort;

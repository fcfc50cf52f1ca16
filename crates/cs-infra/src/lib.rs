//! # cs-infra
//!
//! Adapters for the ports declared in `cs-core` that need third-party
//! crates but no OS clipboard: the PNG encoder, the content hashers, the
//! wall clock and the in-memory history store.

pub mod clipboard;
pub mod hashing;
pub mod time;

pub use clipboard::{InMemoryHistoryStore, PngImageEncoder};
pub use hashing::{hasher_for, Blake3Hasher, Md5Hasher};
pub use time::SystemClock;

//! # clipshelf
//!
//! Background clipboard watcher. Records text and images copied by the user
//! into a bounded, newest-first history and serves it to a UI process over
//! stdio.
//!
//! The library half exists so the bootstrap and the stdio host can be tested
//! without spawning the binary.

pub mod bootstrap;
pub mod cli;
pub mod host;

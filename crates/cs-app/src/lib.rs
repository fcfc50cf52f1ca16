//! clipshelf application layer
//!
//! Use cases the UI collaborator calls: read and write the clipboard, read,
//! clear and follow the history. Each use case is a small struct built from
//! ports; [`UseCases`] builds them from an [`AppDeps`] bundle.

pub mod deps;
pub mod usecases;

pub use deps::{AppDeps, UseCases};

#[cfg(test)]
pub(crate) mod test_support;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardAccessError {
    /// The clipboard could not be opened or its data could not be read.
    #[error("clipboard access failed: {0}")]
    Access(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

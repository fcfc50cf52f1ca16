//! Clipboard history record.
//!
//! A [`ClipboardItem`] is the unit of storage and transport: one observed
//! clipboard change, already normalized into a displayable string. Text is
//! kept verbatim; images are kept as a `data:image/png;base64,` URI.
//!
//! Items are immutable once built. Both constructors reject empty content,
//! so a history entry always has something to show.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardKind {
    Text,
    Image,
}

impl fmt::Display for ClipboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardKind::Text => f.write_str("text"),
            ClipboardKind::Image => f.write_str("image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardItemError {
    #[error("{kind} clipboard item must not be empty")]
    EmptyContent { kind: ClipboardKind },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClipboardItemWire")]
pub struct ClipboardItem {
    #[serde(rename = "type")]
    kind: ClipboardKind,
    content: String,
    timestamp: DateTime<Utc>,
}

/// Unvalidated wire form, only used to route deserialization through
/// [`ClipboardItem::new`].
#[derive(Deserialize)]
struct ClipboardItemWire {
    #[serde(rename = "type")]
    kind: ClipboardKind,
    content: String,
    timestamp: DateTime<Utc>,
}

impl TryFrom<ClipboardItemWire> for ClipboardItem {
    type Error = ClipboardItemError;

    fn try_from(wire: ClipboardItemWire) -> Result<Self, Self::Error> {
        ClipboardItem::new(wire.kind, wire.content, wire.timestamp)
    }
}

impl ClipboardItem {
    pub fn new(
        kind: ClipboardKind,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ClipboardItemError> {
        let content = content.into();
        if content.is_empty() {
            return Err(ClipboardItemError::EmptyContent { kind });
        }
        Ok(Self {
            kind,
            content,
            timestamp,
        })
    }

    pub fn text(
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ClipboardItemError> {
        Self::new(ClipboardKind::Text, content, timestamp)
    }

    /// `data_uri` is the textual image payload produced by
    /// [`EncodedImage::to_data_uri`](crate::image::EncodedImage::to_data_uri).
    pub fn image(
        data_uri: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ClipboardItemError> {
        Self::new(ClipboardKind::Image, data_uri, timestamp)
    }

    pub fn kind(&self) -> ClipboardKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Short human-readable label, used in logs.
    pub fn preview(&self, max_chars: usize) -> String {
        match self.kind {
            ClipboardKind::Text => self.content.chars().take(max_chars).collect(),
            ClipboardKind::Image => String::from("[image]"),
        }
    }
}

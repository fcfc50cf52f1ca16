//! Raw clipboard bitmap → storable image payload.

use super::dib::{decode_dib, DecodeError};
use crate::clipboard::ContentHash;
use crate::ports::{ContentHashPort, ImageEncoderPort};

#[derive(Debug, thiserror::Error)]
pub enum ImagePipelineError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("encode failed: {0}")]
    Encode(#[source] anyhow::Error),

    #[error("hash failed: {0}")]
    Hash(#[source] anyhow::Error),
}

/// Result of a successful capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub data_uri: String,
    /// Digest of the encoded payload, the image dedup key.
    pub hash: ContentHash,
    pub width: u32,
    pub height: u32,
}

pub fn capture_image(
    raw: &[u8],
    encoder: &dyn ImageEncoderPort,
    hasher: &dyn ContentHashPort,
) -> Result<CapturedImage, ImagePipelineError> {
    let grid = decode_dib(raw)?;
    let (width, height) = (grid.width(), grid.height());

    let encoded = encoder.encode(&grid).map_err(ImagePipelineError::Encode)?;
    let hash = hasher
        .hash_bytes(&encoded.bytes)
        .map_err(ImagePipelineError::Hash)?;

    Ok(CapturedImage {
        data_uri: encoded.to_data_uri(),
        hash,
        width,
        height,
    })
}

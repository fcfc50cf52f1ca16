use anyhow::Result;

use crate::image::{EncodedImage, PixelGrid};

/// Lossless encoder turning a decoded bitmap into a storable payload.
///
/// Implementations must be deterministic: identical grids produce identical
/// bytes, since the bytes feed the image dedup hash.
pub trait ImageEncoderPort: Send + Sync {
    fn encode(&self, grid: &PixelGrid) -> Result<EncodedImage>;
}

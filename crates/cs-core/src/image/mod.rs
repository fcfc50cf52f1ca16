//! Image handling for clipboard bitmaps.
//!
//! ```text
//! raw CF_DIB bytes
//!      ↓  dib::decode_dib
//! PixelGrid (top-down RGBA)
//!      ↓  ImageEncoderPort
//! EncodedImage (PNG)
//!      ↓  ContentHashPort + to_data_uri
//! CapturedImage
//! ```
pub mod dib;
mod encoded;
mod grid;
pub mod pipeline;

pub use dib::{decode_dib, encode_dib, DecodeError, DibHeader};
pub use encoded::EncodedImage;
pub use grid::{PixelGrid, PixelGridError};
pub use pipeline::{capture_image, CapturedImage, ImagePipelineError};

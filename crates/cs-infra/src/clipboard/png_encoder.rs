use anyhow::{Context, Result};
use cs_core::image::{EncodedImage, PixelGrid};
use cs_core::ports::ImageEncoderPort;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};

/// Lossless RGBA8 PNG encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngImageEncoder;

impl ImageEncoderPort for PngImageEncoder {
    fn encode(&self, grid: &PixelGrid) -> Result<EncodedImage> {
        let mut png_bytes = Vec::new();
        PngEncoder::new(&mut png_bytes)
            .write_image(
                grid.as_raw(),
                grid.width(),
                grid.height(),
                ColorType::Rgba8.into(),
            )
            .with_context(|| format!("encode {}x{} image to png", grid.width(), grid.height()))?;

        Ok(EncodedImage::png(png_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> PixelGrid {
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let alpha = if (x + y) % 2 == 0 { 255 } else { 64 };
                rgba.extend_from_slice(&[x as u8 * 10, y as u8 * 20, 200, alpha]);
            }
        }
        PixelGrid::from_raw(width, height, rgba).unwrap()
    }

    #[test]
    fn test_png_is_lossless_and_keeps_alpha() {
        let grid = checkerboard(5, 3);

        let encoded = PngImageEncoder.encode(&grid).unwrap();

        assert_eq!(encoded.mime, "image/png");
        let decoded = image::load_from_memory(&encoded.bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (5, 3));
        assert_eq!(decoded.as_raw().as_slice(), grid.as_raw());
    }

    #[test]
    fn test_png_is_deterministic() {
        let grid = checkerboard(4, 4);
        let a = PngImageEncoder.encode(&grid).unwrap();
        let b = PngImageEncoder.encode(&grid).unwrap();
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn test_data_uri_has_png_prefix() {
        let encoded = PngImageEncoder.encode(&checkerboard(1, 1)).unwrap();
        let uri = encoded.to_data_uri();
        assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }
}

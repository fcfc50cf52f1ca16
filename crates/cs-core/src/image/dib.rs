//! Device-independent bitmap (CF_DIB) codec.
//!
//! A clipboard DIB is a `BITMAPINFOHEADER` (or one of its larger V4/V5
//! successors) immediately followed by optional colour masks, an optional
//! colour table and the pixel rows. There is no `BITMAPFILEHEADER`.
//!
//! Only uncompressed 32 bits-per-pixel bitmaps are decoded: `BI_RGB`, and
//! `BI_BITFIELDS` when its masks describe the plain BGRA layout. Anything
//! else fails closed with [`DecodeError`]. Every offset is computed with
//! checked arithmetic and every read goes through a bounds-checked slice.

use std::ops::Range;

use super::grid::{PixelGrid, PixelGridError};

const INFO_HEADER_LEN: usize = 40;
const SUPPORTED_HEADER_SIZES: [u32; 5] = [40, 52, 56, 108, 124];
const MASKS_LEN: usize = 12;

const BI_RGB: u32 = 0;
const BI_BITFIELDS: u32 = 3;

const RED_MASK: u32 = 0x00FF_0000;
const GREEN_MASK: u32 = 0x0000_FF00;
const BLUE_MASK: u32 = 0x0000_00FF;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("bitmap data truncated: need {needed} bytes, have {available}")]
    TruncatedData { needed: usize, available: usize },

    #[error("unsupported bitmap header size {0}")]
    UnsupportedHeader(u32),

    #[error(
        "unsupported bitmap format: {bit_count} bpp, compression {compression}, planes {planes}"
    )]
    UnsupportedFormat {
        bit_count: u16,
        compression: u32,
        planes: u16,
    },

    #[error("unsupported bitfield masks r={red:#010x} g={green:#010x} b={blue:#010x}")]
    UnsupportedMasks { red: u32, green: u32, blue: u32 },

    #[error("invalid bitmap geometry {width}x{height}")]
    InvalidGeometry { width: i32, height: i32 },

    #[error(transparent)]
    Grid(#[from] PixelGridError),
}

/// Leading fields of a `BITMAPINFOHEADER`, little-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DibHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive: rows stored bottom-up. Negative: rows stored top-down.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub clr_used: u32,
    pub clr_important: u32,
}

impl DibHeader {
    pub fn parse(raw: &[u8]) -> Result<Self, DecodeError> {
        if raw.len() < INFO_HEADER_LEN {
            return Err(DecodeError::TruncatedData {
                needed: INFO_HEADER_LEN,
                available: raw.len(),
            });
        }

        Ok(Self {
            header_size: le_u32(raw, 0)?,
            width: le_i32(raw, 4)?,
            height: le_i32(raw, 8)?,
            planes: le_u16(raw, 12)?,
            bit_count: le_u16(raw, 14)?,
            compression: le_u32(raw, 16)?,
            size_image: le_u32(raw, 20)?,
            x_pels_per_meter: le_i32(raw, 24)?,
            y_pels_per_meter: le_i32(raw, 28)?,
            clr_used: le_u32(raw, 32)?,
            clr_important: le_u32(raw, 36)?,
        })
    }

    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    /// Validates the header against `raw` and works out where the pixels are.
    fn layout(&self, raw: &[u8]) -> Result<PixelLayout, DecodeError> {
        if !SUPPORTED_HEADER_SIZES.contains(&self.header_size) {
            return Err(DecodeError::UnsupportedHeader(self.header_size));
        }
        let header_len = self.header_size as usize;
        if raw.len() < header_len {
            return Err(DecodeError::TruncatedData {
                needed: header_len,
                available: raw.len(),
            });
        }

        if self.planes != 1
            || self.bit_count != 32
            || !matches!(self.compression, BI_RGB | BI_BITFIELDS)
        {
            return Err(DecodeError::UnsupportedFormat {
                bit_count: self.bit_count,
                compression: self.compression,
                planes: self.planes,
            });
        }

        // Masks sit right after the 40-byte info header. V2+ headers carry
        // them inline, a plain info header has them appended.
        let mut mask_len = 0;
        if self.compression == BI_BITFIELDS {
            let masks_end = INFO_HEADER_LEN + MASKS_LEN;
            if raw.len() < masks_end {
                return Err(DecodeError::TruncatedData {
                    needed: masks_end,
                    available: raw.len(),
                });
            }
            let (red, green, blue) = (le_u32(raw, 40)?, le_u32(raw, 44)?, le_u32(raw, 48)?);
            if (red, green, blue) != (RED_MASK, GREEN_MASK, BLUE_MASK) {
                return Err(DecodeError::UnsupportedMasks { red, green, blue });
            }
            if header_len == INFO_HEADER_LEN {
                mask_len = MASKS_LEN;
            }
        }

        if self.width <= 0 || self.height == 0 {
            return Err(self.invalid_geometry());
        }
        let width = self.width as usize;
        let rows = self.height.unsigned_abs() as usize;

        let palette_len = (self.clr_used as usize)
            .checked_mul(4)
            .ok_or_else(|| self.invalid_geometry())?;
        let offset = header_len
            .checked_add(mask_len)
            .and_then(|n| n.checked_add(palette_len))
            .ok_or_else(|| self.invalid_geometry())?;
        let stride = width
            .checked_mul(4)
            .ok_or_else(|| self.invalid_geometry())?;
        let end = stride
            .checked_mul(rows)
            .and_then(|n| n.checked_add(offset))
            .ok_or_else(|| self.invalid_geometry())?;

        if raw.len() < end {
            return Err(DecodeError::TruncatedData {
                needed: end,
                available: raw.len(),
            });
        }

        Ok(PixelLayout {
            offset,
            stride,
            width: self.width as u32,
            rows: rows as u32,
            top_down: self.is_top_down(),
        })
    }

    fn invalid_geometry(&self) -> DecodeError {
        DecodeError::InvalidGeometry {
            width: self.width,
            height: self.height,
        }
    }
}

struct PixelLayout {
    offset: usize,
    stride: usize,
    width: u32,
    rows: u32,
    top_down: bool,
}

impl PixelLayout {
    fn source_row(&self, y: usize) -> Range<usize> {
        let rows = self.rows as usize;
        let src = if self.top_down { y } else { rows - y - 1 };
        let start = self.offset + src * self.stride;
        start..start + self.stride
    }
}

/// Decodes a raw clipboard DIB into a top-down RGBA grid.
pub fn decode_dib(raw: &[u8]) -> Result<PixelGrid, DecodeError> {
    let header = DibHeader::parse(raw)?;
    let layout = header.layout(raw)?;

    let mut rgba = Vec::with_capacity(layout.stride * layout.rows as usize);
    for y in 0..layout.rows as usize {
        let range = layout.source_row(y);
        let row = raw.get(range.clone()).ok_or(DecodeError::TruncatedData {
            needed: range.end,
            available: raw.len(),
        })?;
        for bgra in row.chunks_exact(4) {
            rgba.extend_from_slice(&[bgra[2], bgra[1], bgra[0], bgra[3]]);
        }
    }

    Ok(PixelGrid::from_raw(layout.width, layout.rows, rgba)?)
}

/// Encodes a grid as a bottom-up, 32bpp `BI_RGB` DIB with a 40-byte header.
pub fn encode_dib(grid: &PixelGrid) -> Vec<u8> {
    let mut bytes = dib_header(grid.width(), grid.height());
    bytes.reserve(grid.as_raw().len());

    // DIB scan lines are stored bottom to top
    for row in grid.rows().rev() {
        for rgba in row.chunks_exact(4) {
            bytes.extend_from_slice(&[rgba[2], rgba[1], rgba[0], rgba[3]]);
        }
    }

    bytes
}

fn dib_header(width: u32, height: u32) -> Vec<u8> {
    let mut header = vec![0; INFO_HEADER_LEN];
    let image_size = u64::from(width) * u64::from(height) * 4;

    set_bytes(&mut header, &(INFO_HEADER_LEN as u32).to_le_bytes(), 0..4);
    set_bytes(&mut header, &width.to_le_bytes(), 4..8);
    set_bytes(&mut header, &height.to_le_bytes(), 8..12);
    // Planes (must be 1)
    set_bytes(&mut header, &1_u16.to_le_bytes(), 12..14);
    set_bytes(&mut header, &32_u16.to_le_bytes(), 14..16);
    set_bytes(&mut header, &BI_RGB.to_le_bytes(), 16..20);
    set_bytes(
        &mut header,
        &u32::try_from(image_size).unwrap_or(0).to_le_bytes(),
        20..24,
    );
    // Resolution and colour table fields stay zero

    header
}

fn set_bytes(to: &mut [u8], from: &[u8], range: Range<usize>) {
    to[range].copy_from_slice(from);
}

fn field<const N: usize>(raw: &[u8], at: usize) -> Result<[u8; N], DecodeError> {
    raw.get(at..at + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DecodeError::TruncatedData {
            needed: at + N,
            available: raw.len(),
        })
}

fn le_u16(raw: &[u8], at: usize) -> Result<u16, DecodeError> {
    field::<2>(raw, at).map(u16::from_le_bytes)
}

fn le_u32(raw: &[u8], at: usize) -> Result<u32, DecodeError> {
    field::<4>(raw, at).map(u32::from_le_bytes)
}

fn le_i32(raw: &[u8], at: usize) -> Result<i32, DecodeError> {
    field::<4>(raw, at).map(i32::from_le_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RawDib {
        header_size: u32,
        width: i32,
        height: i32,
        bit_count: u16,
        compression: u32,
        clr_used: u32,
        masks: Option<[u32; 3]>,
    }

    impl RawDib {
        fn rgb32(width: i32, height: i32) -> Self {
            Self {
                header_size: 40,
                width,
                height,
                bit_count: 32,
                compression: BI_RGB,
                clr_used: 0,
                masks: None,
            }
        }

        /// Builds the header (plus masks/palette) followed by `pixels`.
        fn build(&self, pixels: &[u8]) -> Vec<u8> {
            let mut raw = vec![0u8; self.header_size as usize];
            raw[0..4].copy_from_slice(&self.header_size.to_le_bytes());
            raw[4..8].copy_from_slice(&self.width.to_le_bytes());
            raw[8..12].copy_from_slice(&self.height.to_le_bytes());
            raw[12..14].copy_from_slice(&1u16.to_le_bytes());
            raw[14..16].copy_from_slice(&self.bit_count.to_le_bytes());
            raw[16..20].copy_from_slice(&self.compression.to_le_bytes());
            raw[32..36].copy_from_slice(&self.clr_used.to_le_bytes());
            if let Some(masks) = self.masks {
                let masks: Vec<u8> = masks.iter().flat_map(|m| m.to_le_bytes()).collect();
                if self.header_size == 40 {
                    raw.extend_from_slice(&masks);
                } else {
                    raw[40..52].copy_from_slice(&masks);
                }
            }
            raw.extend(std::iter::repeat(0xEE).take(self.clr_used as usize * 4));
            raw.extend_from_slice(pixels);
            raw
        }
    }

    /// Two rows of two BGRA pixels, stored bottom row first.
    fn bottom_up_2x2() -> Vec<u8> {
        vec![
            // bottom row: blue, white
            255, 0, 0, 255, 255, 255, 255, 255, //
            // top row: red, translucent green
            0, 0, 255, 255, 0, 255, 0, 128,
        ]
    }

    #[test]
    fn bottom_up_rows_are_flipped() {
        let raw = RawDib::rgb32(2, 2).build(&bottom_up_2x2());
        let grid = decode_dib(&raw).unwrap();

        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(grid.pixel(1, 0), Some([0, 255, 0, 128]));
        assert_eq!(grid.pixel(0, 1), Some([0, 0, 255, 255]));
        assert_eq!(grid.pixel(1, 1), Some([255, 255, 255, 255]));
    }

    #[test]
    fn negative_height_is_top_down() {
        let raw = RawDib::rgb32(2, -2).build(&bottom_up_2x2());
        let grid = decode_dib(&raw).unwrap();

        // first stored row stays on top
        assert_eq!(grid.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(grid.pixel(0, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn round_trip_reproduces_grid() {
        for (w, h) in [(1u32, 1u32), (3, 5), (7, 2)] {
            let rgba: Vec<u8> = (0..w * h * 4).map(|i| (i * 37 % 251) as u8).collect();
            let grid = PixelGrid::from_raw(w, h, rgba).unwrap();

            let raw = encode_dib(&grid);
            assert_eq!(raw.len(), 40 + (w * h * 4) as usize);
            assert_eq!(decode_dib(&raw).unwrap(), grid);
        }
    }

    #[test]
    fn truncated_pixels_fail() {
        let raw = RawDib::rgb32(4, 4).build(&[0u8; 40]);
        assert_eq!(
            decode_dib(&raw),
            Err(DecodeError::TruncatedData {
                needed: 40 + 64,
                available: 80,
            })
        );
    }

    #[test]
    fn short_header_fails() {
        assert!(matches!(
            decode_dib(&[40, 0, 0, 0, 1]),
            Err(DecodeError::TruncatedData { needed: 40, .. })
        ));
        assert!(matches!(
            decode_dib(&[]),
            Err(DecodeError::TruncatedData { .. })
        ));
    }

    #[test]
    fn non_32bpp_is_unsupported() {
        let mut dib = RawDib::rgb32(2, 2);
        dib.bit_count = 24;
        let raw = dib.build(&[0u8; 16]);
        assert!(matches!(
            decode_dib(&raw),
            Err(DecodeError::UnsupportedFormat { bit_count: 24, .. })
        ));
    }

    #[test]
    fn compressed_is_unsupported() {
        let mut dib = RawDib::rgb32(2, 2);
        dib.compression = 1; // BI_RLE8
        let raw = dib.build(&[0u8; 16]);
        assert!(matches!(
            decode_dib(&raw),
            Err(DecodeError::UnsupportedFormat { compression: 1, .. })
        ));
    }

    #[test]
    fn core_header_is_unsupported() {
        let mut raw = RawDib::rgb32(1, 1).build(&[0u8; 4]);
        raw[0..4].copy_from_slice(&12u32.to_le_bytes());
        assert_eq!(decode_dib(&raw), Err(DecodeError::UnsupportedHeader(12)));
    }

    #[test]
    fn standard_bitfields_decode() {
        let mut dib = RawDib::rgb32(2, 2);
        dib.compression = BI_BITFIELDS;
        dib.masks = Some([RED_MASK, GREEN_MASK, BLUE_MASK]);
        let raw = dib.build(&bottom_up_2x2());

        let grid = decode_dib(&raw).unwrap();
        assert_eq!(grid.pixel(0, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn v5_header_with_inline_masks_decodes() {
        let dib = RawDib {
            header_size: 124,
            compression: BI_BITFIELDS,
            masks: Some([RED_MASK, GREEN_MASK, BLUE_MASK]),
            ..RawDib::rgb32(2, 2)
        };
        let raw = dib.build(&bottom_up_2x2());

        let grid = decode_dib(&raw).unwrap();
        assert_eq!(grid.pixel(1, 1), Some([255, 255, 255, 255]));
    }

    #[test]
    fn other_bitfields_are_unsupported() {
        let mut dib = RawDib::rgb32(1, 1);
        dib.compression = BI_BITFIELDS;
        dib.masks = Some([0xF800, 0x07E0, 0x001F]);
        let raw = dib.build(&[0u8; 4]);
        assert!(matches!(
            decode_dib(&raw),
            Err(DecodeError::UnsupportedMasks { .. })
        ));
    }

    #[test]
    fn colour_table_is_skipped() {
        let mut dib = RawDib::rgb32(2, 2);
        dib.clr_used = 2;
        let raw = dib.build(&bottom_up_2x2());

        let grid = decode_dib(&raw).unwrap();
        assert_eq!(grid.pixel(0, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        for (w, h) in [(0, 2), (-3, 2), (2, 0)] {
            let raw = RawDib::rgb32(w, h).build(&[0u8; 64]);
            assert!(
                matches!(decode_dib(&raw), Err(DecodeError::InvalidGeometry { .. })),
                "{w}x{h} should be rejected"
            );
        }
    }

    #[test]
    fn absurd_dimensions_fail_without_allocating() {
        let raw = RawDib::rgb32(i32::MAX, i32::MIN).build(&[0u8; 16]);
        assert!(decode_dib(&raw).is_err());
    }

    #[test]
    fn header_fields_are_parsed() {
        let raw = RawDib::rgb32(3, -7).build(&[0u8; 84]);
        let header = DibHeader::parse(&raw).unwrap();
        assert_eq!(header.width, 3);
        assert_eq!(header.height, -7);
        assert!(header.is_top_down());
        assert_eq!(header.bit_count, 32);
        assert_eq!(header.planes, 1);
    }
}

/// Top-down RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PixelGridError {
    #[error("pixel grid must not be empty ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("pixel buffer has {actual} bytes, {width}x{height} RGBA needs {expected}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl PixelGrid {
    pub fn from_raw(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, PixelGridError> {
        if width == 0 || height == 0 {
            return Err(PixelGridError::Empty { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(PixelGridError::LengthMismatch {
                width,
                height,
                expected: usize::MAX,
                actual: rgba.len(),
            })?;
        if rgba.len() != expected {
            return Err(PixelGridError::LengthMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.rgba
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.rgba
    }

    /// RGBA value at `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Iterates rows top to bottom, each as a `width * 4` byte slice.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.rgba.chunks_exact(self.width as usize * 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_checks_length() {
        let err = PixelGrid::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            PixelGridError::LengthMismatch {
                expected: 16,
                actual: 15,
                ..
            }
        ));
    }

    #[test]
    fn from_raw_rejects_zero_dimensions() {
        assert!(matches!(
            PixelGrid::from_raw(0, 3, Vec::new()),
            Err(PixelGridError::Empty { .. })
        ));
    }

    #[test]
    fn pixel_lookup() {
        let grid = PixelGrid::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(grid.pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(grid.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(grid.pixel(2, 0), None);
        assert_eq!(grid.rows().count(), 1);
    }
}

use crate::Rgba;

/// Bytes per RGBA8 pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Borrowed RGBA8 image, row-major, 4 bytes per pixel.
#[derive(Clone, Copy, Debug)]
pub struct RgbaImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h*4
}

impl<'a> RgbaImageView<'a> {
    /// Wrap a raw RGBA8 buffer, checking that its length matches the dimensions.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ImageViewError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(RGBA_CHANNELS))
            .ok_or(ImageViewError::Dimensions { width, height })?;
        if data.len() != expected {
            return Err(ImageViewError::BufferSize {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Color at `(x, y)`. Panics when the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let i = (y * self.width + x) * RGBA_CHANNELS;
        Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Color at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Pixel bytes of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let stride = self.width * RGBA_CHANNELS;
        &self.data[y * stride..(y + 1) * stride]
    }
}

/// Errors from wrapping a raw RGBA buffer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageViewError {
    #[error("invalid RGBA image buffer length (expected {expected} bytes, got {got})")]
    BufferSize { expected: usize, got: usize },
    #[error("invalid RGBA image dimensions (width={width}, height={height})")]
    Dimensions { width: usize, height: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let data = vec![0u8; 15];
        assert_eq!(
            RgbaImageView::new(2, 2, &data).unwrap_err(),
            ImageViewError::BufferSize {
                expected: 16,
                got: 15
            }
        );
    }

    #[test]
    fn reads_pixels_row_major() {
        #[rustfmt::skip]
        let data = [
            1, 2, 3, 4,    5, 6, 7, 8,
            9, 10, 11, 12, 13, 14, 15, 16,
        ];
        let view = RgbaImageView::new(2, 2, &data).unwrap();
        assert_eq!(view.pixel(1, 0), Rgba::new(5, 6, 7, 8));
        assert_eq!(view.pixel(0, 1), Rgba::new(9, 10, 11, 12));
        assert_eq!(view.get(2, 0), None);
        assert_eq!(view.row(1), &data[8..]);
    }

    #[test]
    fn zero_area_is_empty() {
        let view = RgbaImageView::new(0, 5, &[]).unwrap();
        assert!(view.is_empty());
    }
}

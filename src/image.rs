//! Owned 24-bit BGR pixel buffer with 4-byte aligned rows.
//!
//! Rows are kept exactly as a BMP file stores them: `width` B,G,R triplets
//! followed by zero to three padding bytes. No row flipping or channel
//! swizzling happens anywhere in the crate, so a decoded image re-encodes to
//! the same pixel bytes.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::BitmapError;

/// Bytes per pixel in the stored buffer (B, G, R).
pub const BYTES_PER_PIXEL: usize = 3;

/// Row length in bytes for `width` pixels, rounded up to a multiple of 4.
///
/// Returns `None` if the computation overflows `usize`.
pub fn row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Validated `(row_stride, buffer_len)` for the given dimensions.
pub(crate) fn buffer_layout(width: u32, height: u32) -> Result<(usize, usize), BitmapError> {
    // Both dimensions are written back as signed 32-bit header fields.
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(BitmapError::DimensionsTooLarge { width, height });
    }
    let stride = row_stride(width).ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let len = stride
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    Ok((stride, len))
}

/// A decoded 24-bit image: BGR triplets, bottom-up rows as stored in the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    row_stride: usize,
    pixels: Vec<u8>,
}

impl Image {
    /// Allocate a zero-filled (black) image.
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        check_nonzero(width, height)?;
        let (row_stride, len) = buffer_layout(width, height)?;
        Ok(Self {
            width,
            height,
            row_stride,
            pixels: vec![0u8; len],
        })
    }

    /// Wrap an existing buffer of exactly `height * row_stride(width)` bytes.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        check_nonzero(width, height)?;
        let (row_stride, len) = buffer_layout(width, height)?;
        if pixels.len() < len {
            return Err(BitmapError::BufferTooSmall {
                needed: len,
                actual: pixels.len(),
            });
        }
        if pixels.len() > len {
            return Err(BitmapError::InvalidData(alloc::format!(
                "buffer has {} bytes, expected {len} for {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            row_stride,
            pixels,
        })
    }

    /// A zero-filled image with the same dimensions as `self`.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            row_stride: self.row_stride,
            pixels: vec![0u8; self.pixels.len()],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row including padding. Always a multiple of 4.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Padding bytes at the end of every row.
    pub fn padding(&self) -> usize {
        self.row_stride - self.width as usize * BYTES_PER_PIXEL
    }

    /// Number of pixels (`width * height`), padding excluded.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The full stored buffer, padding included.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Pixel bytes of row `y` without its padding.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.row_stride;
        &self.pixels[start..start + self.width as usize * BYTES_PER_PIXEL]
    }

    /// Mutable pixel bytes of row `y` without its padding.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.row_stride;
        let end = start + self.width as usize * BYTES_PER_PIXEL;
        &mut self.pixels[start..end]
    }

    /// Rows in storage order, padding stripped.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        self.pixels
            .chunks_exact(self.row_stride)
            .map(move |row| &row[..row_bytes])
    }

    /// `[b, g, r]` at column `x` of stored row `y`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let off = self.offset(x, y);
        [self.pixels[off], self.pixels[off + 1], self.pixels[off + 2]]
    }

    /// Overwrite the pixel at column `x` of stored row `y` with `[b, g, r]`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, bgr: [u8; 3]) {
        let off = self.offset(x, y);
        self.pixels[off..off + 3].copy_from_slice(&bgr);
    }

    /// Whether every pixel has equal blue, green and red values.
    pub fn is_grayscale(&self) -> bool {
        self.rows()
            .flat_map(|row| row.chunks_exact(BYTES_PER_PIXEL))
            .all(|px| px[0] == px[1] && px[1] == px[2])
    }

    /// Typed view of row `y`.
    #[cfg(feature = "rgb")]
    pub fn bgr_row(&self, y: u32) -> &[rgb::alt::BGR8] {
        use rgb::AsPixels as _;
        self.row(y).as_pixels()
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.row_stride + x as usize * BYTES_PER_PIXEL
    }
}

fn check_nonzero(width: u32, height: u32) -> Result<(), BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidData(alloc::format!(
            "image dimensions must be non-zero, got {width}x{height}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_rounds_up_to_four() {
        assert_eq!(row_stride(1), Some(4));
        assert_eq!(row_stride(2), Some(8));
        assert_eq!(row_stride(3), Some(12));
        assert_eq!(row_stride(4), Some(12));
        assert_eq!(row_stride(5), Some(16));
        for w in 1..64 {
            let s = row_stride(w).unwrap();
            assert_eq!(s % 4, 0);
            assert!(s >= 3 * w as usize && s < 3 * w as usize + 4);
        }
    }

    #[test]
    fn new_is_zero_filled() {
        let img = Image::new(3, 2).unwrap();
        assert_eq!(img.row_stride(), 12);
        assert_eq!(img.padding(), 3);
        assert_eq!(img.pixels().len(), 24);
        assert!(img.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(Image::new(0, 4), Err(BitmapError::InvalidData(_))));
        assert!(matches!(Image::new(4, 0), Err(BitmapError::InvalidData(_))));
    }

    #[test]
    fn oversized_dimensions_rejected() {
        assert!(matches!(
            Image::new(u32::MAX, 1),
            Err(BitmapError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(Image::from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Image::from_raw(2, 2, vec![0; 15]),
            Err(BitmapError::BufferTooSmall {
                needed: 16,
                actual: 15
            })
        ));
        assert!(matches!(
            Image::from_raw(2, 2, vec![0; 17]),
            Err(BitmapError::InvalidData(_))
        ));
    }

    #[test]
    fn pixel_addressing_skips_padding() {
        let mut img = Image::new(3, 2).unwrap();
        img.set_pixel(2, 1, [1, 2, 3]);
        assert_eq!(img.pixel(2, 1), [1, 2, 3]);
        assert_eq!(&img.pixels()[12 + 6..12 + 9], &[1, 2, 3]);
        assert_eq!(img.row(1), &[0, 0, 0, 0, 0, 0, 1, 2, 3]);
        assert_eq!(img.rows().count(), 2);
        assert!(img.rows().all(|r| r.len() == 9));
    }

    #[test]
    fn grayscale_ignores_padding() {
        let mut pixels = vec![7u8; 12];
        pixels[9..12].copy_from_slice(&[1, 2, 3]);
        let img = Image::from_raw(3, 1, pixels).unwrap();
        assert!(img.is_grayscale());

        let mut img = img;
        img.set_pixel(0, 0, [7, 7, 8]);
        assert!(!img.is_grayscale());
    }

    #[test]
    #[should_panic]
    fn pixel_out_of_bounds_panics() {
        let img = Image::new(2, 2).unwrap();
        let _ = img.pixel(2, 0);
    }

    #[cfg(feature = "rgb")]
    #[test]
    fn bgr_row_view() {
        let mut img = Image::new(2, 1).unwrap();
        img.set_pixel(1, 0, [10, 20, 30]);
        let row = img.bgr_row(0);
        assert_eq!(row.len(), 2);
        assert_eq!((row[1].b, row[1].g, row[1].r), (10, 20, 30));
    }
}

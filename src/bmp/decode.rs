//! BMP decoder: uncompressed 24-bit `BI_RGB` only.

use alloc::vec::Vec;

use enough::Stop;

use super::header::{
    BITS_PER_PIXEL, COMPRESSION_NONE, Headers, INFO_HEADER_SIZE, PIXEL_DATA_OFFSET,
};
use crate::error::BitmapError;
use crate::image::{self, Image};

/// Validated header information of a 24-bit BMP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    /// Bytes per stored row, padding included.
    pub row_stride: usize,
    /// `height * row_stride`.
    pub pixel_data_size: usize,
    /// The raw headers as found in the file.
    pub headers: Headers,
}

/// Parse and validate the headers without touching pixel data.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpInfo, BitmapError> {
    let headers = Headers::parse(data)?;
    let info = &headers.info;

    if info.bits_per_pixel != BITS_PER_PIXEL {
        return Err(BitmapError::UnsupportedFormat(alloc::format!(
            "{} bits per pixel, only 24 is supported",
            info.bits_per_pixel
        )));
    }
    if info.compression != COMPRESSION_NONE {
        return Err(BitmapError::UnsupportedFormat(alloc::format!(
            "compression mode {}, only uncompressed data is supported",
            info.compression
        )));
    }
    if info.planes != 1 {
        return Err(BitmapError::UnsupportedFormat(alloc::format!(
            "{} color planes, expected 1",
            info.planes
        )));
    }
    if info.colors_used != 0 {
        return Err(BitmapError::UnsupportedFormat(alloc::format!(
            "color table with {} entries",
            info.colors_used
        )));
    }
    if (info.header_size as usize) < INFO_HEADER_SIZE {
        return Err(BitmapError::UnsupportedFormat(alloc::format!(
            "{}-byte info header, BITMAPINFOHEADER or later required",
            info.header_size
        )));
    }
    if info.height < 0 {
        return Err(BitmapError::UnsupportedFormat(
            "top-down row order (negative height)".into(),
        ));
    }
    if info.width <= 0 || info.height == 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "image dimensions {}x{}",
            info.width,
            info.height
        )));
    }
    if (headers.file.pixel_data_offset as usize) < PIXEL_DATA_OFFSET {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "pixel data offset {} overlaps the headers",
            headers.file.pixel_data_offset
        )));
    }

    let width = info.width as u32;
    let height = info.height as u32;
    let (row_stride, pixel_data_size) = image::buffer_layout(width, height)?;

    Ok(BmpInfo {
        width,
        height,
        row_stride,
        pixel_data_size,
        headers,
    })
}

/// Copy the stored pixel rows, padding included, into an owned image.
pub(crate) fn decode_bmp_pixels(
    data: &[u8],
    info: &BmpInfo,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let start = info.headers.file.pixel_data_offset as usize;
    let end = start
        .checked_add(info.pixel_data_size)
        .ok_or(BitmapError::UnexpectedEof)?;
    let src = data.get(start..end).ok_or(BitmapError::UnexpectedEof)?;

    let mut pixels = Vec::with_capacity(info.pixel_data_size);
    for (row_idx, row) in src.chunks_exact(info.row_stride).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        pixels.extend_from_slice(row);
    }

    Image::from_raw(info.width, info.height, pixels)
}

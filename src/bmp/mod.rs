//! BMP codec for uncompressed 24-bit images.
//!
//! Use the top-level [`crate::decode_bmp`], [`crate::encode_bmp`] and
//! [`crate::probe_bmp`], or [`crate::DecodeRequest`] for limits.

mod decode;
mod encode;
pub mod header;

pub use decode::BmpInfo;
pub use header::{FileHeader, Headers, InfoHeader, RESOLUTION_PPM};

use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;
use alloc::vec::Vec;
use enough::Stop;

/// Validate headers and report dimensions without copying pixels.
pub(crate) fn probe(data: &[u8]) -> Result<BmpInfo, BitmapError> {
    decode::parse_bmp_header(data)
}

/// Decode BMP data into an [`Image`], rows and padding exactly as stored.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let info = decode::parse_bmp_header(data)?;
    if let Some(limits) = limits {
        limits.check(info.width, info.height, info.pixel_data_size)?;
    }
    stop.check()?;
    let image = decode::decode_bmp_pixels(data, &info, stop)?;
    log::debug!(
        "decoded {}x{} BMP, stride {} ({} padding bytes per row)",
        image.width(),
        image.height(),
        image.row_stride(),
        image.padding()
    );
    Ok(image)
}

/// Encode to BMP.
pub(crate) fn encode(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let out = encode::encode_bmp(image, stop)?;
    log::debug!(
        "encoded {}x{} BMP, {} bytes",
        image.width(),
        image.height(),
        out.len()
    );
    Ok(out)
}

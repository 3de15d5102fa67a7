//! # bmpfilter
//!
//! Uncompressed 24-bit BMP decoder and encoder, plus three fixed filters:
//! grayscale reduction, histogram equalization, and Sobel edge detection.
//!
//! ## Byte-exact images
//!
//! [`Image`] keeps pixel rows exactly as a BMP stores them: bottom-up, B,G,R
//! order, each row padded to a multiple of four bytes. Decoding copies the
//! stored rows verbatim and encoding writes them back verbatim, so
//! `decode_bmp(&encode_bmp(&img)?)? == img` for every image.
//!
//! ## Filters
//!
//! - [`filter::to_gray`] — `floor(0.299 R + 0.587 G + 0.114 B)` replicated to all channels
//! - [`filter::equalize`] — floor-CDF histogram equalization
//! - [`filter::detect_edges`] — 3×3 Sobel magnitude, threshold 100, black border
//!
//! Every filter borrows its input and returns a freshly allocated image.
//!
//! ## Non-Goals
//!
//! - Compressed, palettized, or non-24-bit bitmaps
//! - Top-down (negative height) bitmaps
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use bmpfilter::{decode_bmp, encode_bmp, filter};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let image = decode_bmp(data, Unstoppable)?;
//! let gray = filter::to_gray(&image);
//! let edges = filter::detect_edges(&gray);
//! let encoded = encode_bmp(&edges, Unstoppable)?;
//! # Ok::<(), bmpfilter::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod limits;

pub mod bmp;
pub mod filter;
pub mod pipeline;

mod decode;

// Re-exports
pub use bmp::BmpInfo;
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use image::{BYTES_PER_PIXEL, Image, row_stride};
pub use limits::Limits;
pub use pipeline::PipelineOutput;

use alloc::vec::Vec;

/// Decode a 24-bit uncompressed BMP.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Validate BMP headers and report dimensions without decoding pixels.
pub fn probe_bmp(data: &[u8]) -> Result<BmpInfo, BitmapError> {
    bmp::probe(data)
}

/// Encode an image as a 24-bit uncompressed BMP.
pub fn encode_bmp(image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    bmp::encode(image, &stop)
}

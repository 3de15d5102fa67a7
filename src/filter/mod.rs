//! Pixel transforms. Each takes `&Image` and returns a new [`Image`] of the
//! same dimensions; padding bytes of the result are zero.
//!
//! [`equalize`] and [`detect_edges`] read one channel only and expect a
//! grayscale input, normally the output of [`to_gray`].
//!
//! [`Image`]: crate::Image

pub mod edges;
pub mod equalize;
pub mod grayscale;

pub use edges::{EDGE_THRESHOLD, SOBEL_X, SOBEL_Y, detect_edges, gradient_magnitude};
pub use equalize::{Histogram, equalization_map, equalize};
pub use grayscale::{luminance, to_gray};

//! Luminance reduction.

use crate::image::{BYTES_PER_PIXEL, Image};

/// Rec. 601 luma weights in thousandths: red, green, blue.
pub const LUMA_WEIGHTS: [u32; 3] = [299, 587, 114];

/// `floor(0.299*r + 0.587*g + 0.114*b)`.
///
/// Computed exactly in integers. The weights sum to 1000, so a gray input
/// maps to itself.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let weighted = wr * u32::from(r) + wg * u32::from(g) + wb * u32::from(b);
    (weighted / 1000) as u8
}

/// Replace every pixel by its luminance in all three channels.
///
/// Output padding is zero regardless of the input's padding bytes.
pub fn to_gray(image: &Image) -> Image {
    let mut out = image.blank_like();
    for y in 0..image.height() {
        let src = image.row(y);
        let dst = out.row_mut(y);
        for (s, d) in src
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            let l = luminance(s[2], s[1], s[0]);
            d.fill(l);
        }
    }
    out
}

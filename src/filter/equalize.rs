//! Histogram equalization of grayscale images.
//!
//! The mapping is `s[k] = trunc(255 * Σ_{j<=k} count[j] / N)` with the
//! probabilities and the running sum held in `f32`. Truncation rather than
//! rounding is deliberate: output must match existing equalized files.

use crate::image::{BYTES_PER_PIXEL, Image};

/// Number of intensity levels.
pub const LEVELS: usize = 256;

/// Per-intensity pixel counts of a grayscale image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; LEVELS],
    total: u64,
}

impl Histogram {
    /// Count the blue channel of every pixel. Padding bytes are not visited.
    pub fn of(image: &Image) -> Self {
        let mut counts = [0u32; LEVELS];
        for row in image.rows() {
            for px in row.chunks_exact(BYTES_PER_PIXEL) {
                counts[px[0] as usize] += 1;
            }
        }
        Self {
            counts,
            total: image.pixel_count() as u64,
        }
    }

    pub fn counts(&self) -> &[u32; LEVELS] {
        &self.counts
    }

    /// Number of pixels counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `count[k] / N` for every level.
    pub fn probabilities(&self) -> [f32; LEVELS] {
        let total = self.total as f32;
        self.counts.map(|c| c as f32 / total)
    }
}

/// The intensity lookup table `s` for a histogram. Non-decreasing in `k`.
pub fn equalization_map(histogram: &Histogram) -> [u8; LEVELS] {
    let pr = histogram.probabilities();
    let mut map = [0u8; LEVELS];
    let mut sum = 0.0f32;
    for (s, p) in map.iter_mut().zip(pr) {
        sum += p;
        *s = (255.0 * sum) as u8;
    }
    map
}

/// Remap every pixel's intensity through [`equalization_map`].
///
/// Reads channel 0 only; the input is expected to be grayscale.
pub fn equalize(image: &Image) -> Image {
    let map = equalization_map(&Histogram::of(image));
    let mut out = image.blank_like();
    for y in 0..image.height() {
        let src = image.row(y);
        let dst = out.row_mut(y);
        for (s, d) in src
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            d.fill(map[s[0] as usize]);
        }
    }
    out
}

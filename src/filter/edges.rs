//! Sobel edge detection with a fixed magnitude threshold.
//!
//! Only windows that fit entirely inside the image are evaluated, so the
//! outermost row and column on every side of the output stay black.

use crate::image::{BYTES_PER_PIXEL, Image};

/// Row-major 3×3 mask, vertical intensity change.
pub const SOBEL_X: [i32; 9] = [-1, -2, -1, 0, 0, 0, 1, 2, 1];
/// Row-major 3×3 mask, horizontal intensity change.
pub const SOBEL_Y: [i32; 9] = [-1, 0, 1, -2, 0, 2, -1, 0, 1];
/// Pixels whose gradient magnitude exceeds this are edges.
pub const EDGE_THRESHOLD: u32 = 100;

const EDGE: [u8; 3] = [255, 255, 255];
const BACKGROUND: [u8; 3] = [0, 0, 0];

/// `floor(sqrt(Gx² + Gy²))` for the 3×3 window centred on `(x, y)`.
///
/// Intensities are read from the blue channel.
///
/// # Panics
///
/// If the window does not fit, i.e. `(x, y)` lies on the image border.
pub fn gradient_magnitude(image: &Image, x: u32, y: u32) -> u32 {
    assert!(
        x >= 1 && y >= 1 && x + 1 < image.width() && y + 1 < image.height(),
        "({x}, {y}) has no full 3x3 neighborhood"
    );
    window_magnitude(image, (x - 1) as usize, y - 1)
}

fn window_magnitude(image: &Image, left: usize, top: u32) -> u32 {
    let mut gx = 0i32;
    let mut gy = 0i32;
    for m in 0..3 {
        let row = image.row(top + m as u32);
        for n in 0..3 {
            let v = i32::from(row[(left + n) * BYTES_PER_PIXEL]);
            gx += SOBEL_X[m * 3 + n] * v;
            gy += SOBEL_Y[m * 3 + n] * v;
        }
    }
    ((gx * gx + gy * gy) as u32).isqrt()
}

/// Binary edge map: white where the gradient magnitude exceeds
/// [`EDGE_THRESHOLD`], black elsewhere and on the border.
pub fn detect_edges(image: &Image) -> Image {
    let mut out = image.blank_like();
    let width = image.width();
    let height = image.height();
    if width < 3 || height < 3 {
        return out;
    }
    for top in 0..height - 2 {
        for left in 0..width - 2 {
            let m = window_magnitude(image, left as usize, top);
            let px = if m > EDGE_THRESHOLD { EDGE } else { BACKGROUND };
            out.set_pixel(left + 1, top + 1, px);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> Image {
        let mut img = Image::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                let v = f(x, y);
                img.set_pixel(x, y, [v, v, v]);
            }
        }
        img
    }

    fn is_border(img: &Image, x: u32, y: u32) -> bool {
        x == 0 || y == 0 || x + 1 == img.width() || y + 1 == img.height()
    }

    #[test]
    fn flat_field_has_no_edges() {
        let out = detect_edges(&gray(6, 5, |_, _| 180));
        assert!(out.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn vertical_step() {
        // left half 0, right half 255
        let img = gray(6, 4, |x, _| if x < 3 { 0 } else { 255 });
        assert_eq!(gradient_magnitude(&img, 2, 1), 1020);
        assert_eq!(gradient_magnitude(&img, 1, 1), 0);
        let out = detect_edges(&img);
        for y in 1..3 {
            assert_eq!(out.pixel(1, y), [0, 0, 0]);
            assert_eq!(out.pixel(2, y), [255, 255, 255]);
            assert_eq!(out.pixel(3, y), [255, 255, 255]);
            assert_eq!(out.pixel(4, y), [0, 0, 0]);
        }
    }

    #[test]
    fn horizontal_step_uses_other_mask() {
        let img = gray(4, 6, |_, y| if y < 3 { 10 } else { 60 });
        // |Gx| = 4 * 50
        assert_eq!(gradient_magnitude(&img, 1, 2), 200);
    }

    #[test]
    fn threshold_is_strict() {
        // Gy = 4 * 25 = 100, not above the threshold
        let img = gray(3, 3, |x, _| if x == 2 { 25 } else { 0 });
        assert_eq!(gradient_magnitude(&img, 1, 1), 100);
        assert_eq!(detect_edges(&img).pixel(1, 1), [0, 0, 0]);

        let img = gray(3, 3, |x, _| if x == 2 { 26 } else { 0 });
        assert_eq!(gradient_magnitude(&img, 1, 1), 104);
        assert_eq!(detect_edges(&img).pixel(1, 1), [255, 255, 255]);
    }

    #[test]
    fn border_stays_black() {
        let img = gray(7, 6, |x, y| ((x * 97 + y * 61) % 256) as u8);
        let out = detect_edges(&img);
        for y in 0..out.height() {
            for x in 0..out.width() {
                if is_border(&out, x, y) {
                    assert_eq!(out.pixel(x, y), [0, 0, 0], "border pixel ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn tiny_images_are_black() {
        for (w, h) in [(1, 1), (2, 5), (5, 2)] {
            let out = detect_edges(&gray(w, h, |x, _| if x % 2 == 0 { 255 } else { 0 }));
            assert_eq!((out.width(), out.height()), (w, h));
            assert!(out.pixels().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn padding_does_not_leak_into_convolution() {
        // width 3 has 3 padding bytes per row; fill them with white
        let mut img = gray(3, 3, |_, _| 0);
        for y in 0..3 {
            let start = y * 12 + 9;
            img.pixels_mut()[start..start + 3].fill(255);
        }
        let out = detect_edges(&img);
        assert!(out.pixels().iter().all(|&b| b == 0));
    }
}

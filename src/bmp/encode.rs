//! BMP encoder: uncompressed 24-bit, bottom-up, rows written as stored.

use alloc::vec::Vec;

use enough::Stop;

use super::header::{FileHeader, Headers, InfoHeader, PIXEL_DATA_OFFSET};
use crate::error::BitmapError;
use crate::image::Image;

/// Encode an image to BMP bytes: 54 header bytes, then the pixel buffer verbatim.
pub(crate) fn encode_bmp(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let width = image.width();
    let height = image.height();
    let pixel_data_size = image.pixels().len();
    let file_size = pixel_data_size
        .checked_add(PIXEL_DATA_OFFSET)
        .filter(|&size| size <= u32::MAX as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    let headers = Headers {
        file: FileHeader::for_pixel_data(pixel_data_size as u32),
        info: InfoHeader::for_image(width, height, pixel_data_size as u32),
    };

    let mut out = Vec::with_capacity(file_size);
    headers.write(&mut out);

    for (row_idx, row) in image.pixels().chunks_exact(image.row_stride()).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    #[test]
    fn layout_of_3x2() {
        let mut img = Image::new(3, 2).unwrap();
        img.set_pixel(0, 0, [1, 2, 3]);
        img.set_pixel(2, 1, [7, 8, 9]);
        let out = encode_bmp(&img, &Unstoppable).unwrap();

        assert_eq!(out.len(), 54 + 24);
        assert_eq!(&out[2..6], &78u32.to_le_bytes());
        assert_eq!(&out[34..38], &24u32.to_le_bytes());
        assert_eq!(&out[54..57], &[1, 2, 3]);
        // padding of row 0
        assert_eq!(&out[63..66], &[0, 0, 0]);
        assert_eq!(&out[72..75], &[7, 8, 9]);
    }

    #[test]
    fn padding_bytes_are_written_as_stored() {
        let mut pixels = alloc::vec![0u8; 4];
        pixels[3] = 0x5A;
        let img = Image::from_raw(1, 1, pixels).unwrap();
        let out = encode_bmp(&img, &Unstoppable).unwrap();
        assert_eq!(&out[54..], &[0, 0, 0, 0x5A]);
    }
}

//! BMP file header and BITMAPINFOHEADER, read and written field by field.

use alloc::vec::Vec;

use crate::error::BitmapError;

/// File signature, ASCII `BM`.
pub const SIGNATURE: [u8; 2] = *b"BM";
/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the BITMAPINFOHEADER in bytes.
pub const INFO_HEADER_SIZE: usize = 40;
/// Pixel-data offset written by the encoder.
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// Horizontal and vertical resolution written by the encoder, pixels per metre.
pub const RESOLUTION_PPM: i32 = 3780;
/// The only bit depth this crate handles.
pub const BITS_PER_PIXEL: u16 = 24;
/// `BI_RGB`: no compression.
pub const COMPRESSION_NONE: u32 = 0;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let end = self.pos.checked_add(N).ok_or(BitmapError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    fn u16_le(&mut self) -> Result<u16, BitmapError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn u32_le(&mut self) -> Result<u32, BitmapError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn i32_le(&mut self) -> Result<i32, BitmapError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── File header ─────────────────────────────────────────────────────

/// The 14-byte `BITMAPFILEHEADER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    /// Total file size as recorded by the writer. Not trusted on decode.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset of the first pixel byte from the start of the file.
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Header for an encoded file whose pixel buffer is `pixel_data_size` bytes.
    pub fn for_pixel_data(pixel_data_size: u32) -> Self {
        Self {
            signature: SIGNATURE,
            file_size: pixel_data_size.wrapping_add(PIXEL_DATA_OFFSET as u32),
            reserved1: 0,
            reserved2: 0,
            pixel_data_offset: PIXEL_DATA_OFFSET as u32,
        }
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved1.to_le_bytes());
        out.extend_from_slice(&self.reserved2.to_le_bytes());
        out.extend_from_slice(&self.pixel_data_offset.to_le_bytes());
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<Self, BitmapError> {
        Ok(Self {
            signature: cursor.read_fixed_bytes()?,
            file_size: cursor.u32_le()?,
            reserved1: cursor.u16_le()?,
            reserved2: cursor.u16_le()?,
            pixel_data_offset: cursor.u32_le()?,
        })
    }
}

// ── Info header ─────────────────────────────────────────────────────

/// The 40-byte `BITMAPINFOHEADER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up rows.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Header for an uncompressed 24-bit bottom-up image.
    pub fn for_image(width: u32, height: u32, image_size: u32) -> Self {
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width: width as i32,
            height: height as i32,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_size,
            x_pixels_per_meter: RESOLUTION_PPM,
            y_pixels_per_meter: RESOLUTION_PPM,
            colors_used: 0,
            colors_important: 0,
        }
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.colors_important.to_le_bytes());
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<Self, BitmapError> {
        Ok(Self {
            header_size: cursor.u32_le()?,
            width: cursor.i32_le()?,
            height: cursor.i32_le()?,
            planes: cursor.u16_le()?,
            bits_per_pixel: cursor.u16_le()?,
            compression: cursor.u32_le()?,
            image_size: cursor.u32_le()?,
            x_pixels_per_meter: cursor.i32_le()?,
            y_pixels_per_meter: cursor.i32_le()?,
            colors_used: cursor.u32_le()?,
            colors_important: cursor.u32_le()?,
        })
    }
}

/// Both headers, parsed but not yet validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Headers {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl Headers {
    /// Read both headers from the first 54 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        let mut cursor = Cursor::new(data);
        let file = FileHeader::read(&mut cursor)?;
        // Reject foreign data before demanding a full info header.
        if file.signature != SIGNATURE {
            return Err(BitmapError::UnsupportedFormat(alloc::format!(
                "bad signature {:02x?}, expected \"BM\"",
                file.signature
            )));
        }
        let info = InfoHeader::read(&mut cursor)?;
        Ok(Self { file, info })
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        self.file.write(out);
        self.info.write(out);
    }
}

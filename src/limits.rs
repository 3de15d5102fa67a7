use crate::error::BitmapError;

/// Resource limits applied before a BMP's pixel buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the stored pixel buffer, row padding included.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limit only the pixel count.
    pub fn pixels(max_pixels: u64) -> Self {
        Self {
            max_pixels: Some(max_pixels),
            ..Self::default()
        }
    }

    /// Check an image of `width`×`height` whose buffer takes `buffer_bytes`.
    pub(crate) fn check(
        &self,
        width: u32,
        height: u32,
        buffer_bytes: usize,
    ) -> Result<(), BitmapError> {
        let pixels = u64::from(width) * u64::from(height);
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds("pixel count", pixels, self.max_pixels)?;
        exceeds("pixel buffer bytes", buffer_bytes as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), BitmapError> {
    match limit {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

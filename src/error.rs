use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, encoding, and image construction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}

impl BitmapError {
    /// Whether the input was rejected as a bitmap variant this crate does not handle.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, BitmapError::UnsupportedFormat(_))
    }
}

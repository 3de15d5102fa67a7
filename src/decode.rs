use enough::Stop;

use crate::bmp::{self, BmpInfo};
use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;

/// A pending BMP decode with optional resource limits.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or buffer size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Validate the headers only.
    pub fn probe(&self) -> Result<BmpInfo, BitmapError> {
        bmp::probe(self.data)
    }

    /// Decode into an owned [`Image`].
    ///
    /// Nothing is returned on failure; there is no partially decoded image.
    pub fn decode(self, stop: impl Stop) -> Result<Image, BitmapError> {
        bmp::decode(self.data, self.limits, &stop)
    }
}

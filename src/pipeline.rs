//! The fixed filter chain: decode → gray → {equalize, edges} → encode.

use crate::filter::{detect_edges, equalize, to_gray};
use crate::image::Image;

/// Every stage's result. Both branches start from `gray`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOutput {
    pub gray: Image,
    pub equalized: Image,
    pub edges: Image,
}

/// Run the filter chain on a decoded image.
pub fn run(image: &Image) -> PipelineOutput {
    let gray = to_gray(image);
    log::trace!("grayscale done");
    let equalized = equalize(&gray);
    log::trace!("equalization done");
    let edges = detect_edges(&gray);
    log::trace!("edge detection done");
    PipelineOutput {
        gray,
        equalized,
        edges,
    }
}

#[cfg(feature = "std")]
mod files {
    use std::fs;
    use std::path::Path;

    use enough::Unstoppable;

    use super::{PipelineOutput, run};
    use crate::error::BitmapError;
    use crate::image::Image;

    /// Read and decode a BMP file.
    pub fn read_bmp(path: impl AsRef<Path>) -> Result<Image, BitmapError> {
        let data = fs::read(path.as_ref())?;
        crate::decode_bmp(&data, Unstoppable)
    }

    /// Encode and write a BMP file, replacing any existing file.
    pub fn write_bmp(path: impl AsRef<Path>, image: &Image) -> Result<(), BitmapError> {
        let data = crate::encode_bmp(image, Unstoppable)?;
        fs::write(path.as_ref(), data)?;
        Ok(())
    }

    /// Decode `input`, run the chain, and write the edge map then the
    /// equalized image.
    ///
    /// Nothing is written if decoding fails. A failure writing the equalized
    /// image leaves the already written edge map in place.
    pub fn process_files(
        input: impl AsRef<Path>,
        edges_output: impl AsRef<Path>,
        equalized_output: impl AsRef<Path>,
    ) -> Result<PipelineOutput, BitmapError> {
        let input = input.as_ref();
        let image = read_bmp(input)?;
        log::info!(
            "{}: {}x{} pixels",
            input.display(),
            image.width(),
            image.height()
        );
        let output = run(&image);
        write_bmp(edges_output.as_ref(), &output.edges)?;
        log::info!("wrote edge map to {}", edges_output.as_ref().display());
        write_bmp(equalized_output.as_ref(), &output.equalized)?;
        log::info!(
            "wrote equalized image to {}",
            equalized_output.as_ref().display()
        );
        Ok(output)
    }
}

#[cfg(feature = "std")]
pub use files::{process_files, read_bmp, write_bmp};

//! Pixel loader: decodes an image file into a three-channel [`PixelArray`].
//!
//! Decoding is delegated to the `image` crate with the format guessed from
//! the file contents. The decoded layout is then classified into one of the
//! supported [`SourceLayout`]s, each of which normalises to RGB bytes:
//!
//! | Layout | Channels | Normalisation            |
//! |--------|----------|--------------------------|
//! | Gray   | 1        | value copied to R, G, B  |
//! | Rgb    | 3        | unchanged                |
//! | Rgba   | 4        | alpha dropped            |
//!
//! Alpha is discarded, not composited against a background. Any other
//! layout (gray + alpha) is rejected before any block is reduced.

use crate::error::HalftoneError;
use halftone_grid::PixelArray;
use image::{ColorType, DynamicImage};
use std::path::Path;

/// Channel layouts the loader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLayout {
    Gray,
    Rgb,
    Rgba,
}

impl SourceLayout {
    /// Classify a decoded color type by channel count. Bit depth is ignored;
    /// everything is normalised to 8 bits per channel.
    pub fn detect(color: ColorType) -> Result<Self, HalftoneError> {
        match color.channel_count() {
            1 => Ok(SourceLayout::Gray),
            3 => Ok(SourceLayout::Rgb),
            4 => Ok(SourceLayout::Rgba),
            channels => Err(HalftoneError::UnsupportedFormat { channels }),
        }
    }

    /// Produce the row-major RGB bytes for `image`.
    pub fn normalize(self, image: &DynamicImage) -> Vec<u8> {
        match self {
            SourceLayout::Gray => image
                .to_luma8()
                .into_raw()
                .into_iter()
                .flat_map(|v| [v, v, v])
                .collect(),
            SourceLayout::Rgb => image.to_rgb8().into_raw(),
            SourceLayout::Rgba => image
                .to_rgba8()
                .into_raw()
                .chunks_exact(4)
                .flat_map(|p| [p[0], p[1], p[2]])
                .collect(),
        }
    }
}

/// Read and decode the image at `path`.
pub fn load_pixels(path: impl AsRef<Path>) -> Result<PixelArray, HalftoneError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| HalftoneError::io(path, e))?;
    let pixels = load_pixels_from_memory(&bytes)?;

    tracing::info!(
        path = %path.display(),
        width = pixels.width(),
        height = pixels.height(),
        "Loaded source image"
    );
    Ok(pixels)
}

/// Decode an encoded image held in memory.
pub fn load_pixels_from_memory(bytes: &[u8]) -> Result<PixelArray, HalftoneError> {
    let image = image::load_from_memory(bytes)?;
    from_dynamic(&image)
}

/// Normalise an already decoded image.
pub fn from_dynamic(image: &DynamicImage) -> Result<PixelArray, HalftoneError> {
    let layout = SourceLayout::detect(image.color())?;
    tracing::debug!(?layout, color = ?image.color(), "Detected source layout");

    let data = layout.normalize(image);
    Ok(PixelArray::new(
        image.width() as usize,
        image.height() as usize,
        data,
    )?)
}

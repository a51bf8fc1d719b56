pub mod raster;
pub mod vector;

pub use raster::RasterRenderer;
pub use vector::VectorRenderer;

use serde::Deserialize;

/// Pixel dimensions of the rendered output (the source image size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl OutputSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Canvas fill behind the dots in the PNG output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    Transparent,
    White,
}

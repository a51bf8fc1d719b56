//! Halftone - convert raster images into dot-grid PNG and SVG renderings.
//!
//! The numeric core (block reduction, contrast curve, dot geometry) lives in
//! the `halftone-grid` crate. This crate adds image decoding, the two
//! renderers, output naming and settings.

pub mod error;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod rendering;
pub mod settings;

pub use error::{ConfigError, HalftoneError, RenderError};
pub use halftone_grid::{BlockSize, DarknessMatrix, HalftoneConfig, PixelArray};
pub use pipeline::{Halftoner, Rendered};
pub use settings::{Overrides, Settings};

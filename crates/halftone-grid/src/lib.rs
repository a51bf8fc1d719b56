//! halftone-grid: the numeric core of the halftone renderer
//!
//! This crate turns an RGB pixel grid into one dot per block. It performs no
//! I/O; decoding images and encoding PNG/SVG output live in the `halftone`
//! binary crate.
//!
//! # Quick Start
//!
//! ```
//! use halftone_grid::{reduce, BlockSize, DotGeometry, HalftoneConfig, PixelArray};
//!
//! // 16x16 mid-gray image
//! let pixels = PixelArray::new(16, 16, vec![128; 16 * 16 * 3]).unwrap();
//! let blocksize = BlockSize::new(8).unwrap();
//!
//! let matrix = reduce(&pixels, blocksize);
//! assert_eq!((matrix.columns(), matrix.rows()), (2, 2));
//!
//! let config = HalftoneConfig::default();
//! let geometry = DotGeometry::new(blocksize, config.darkness_factor);
//! assert_eq!(geometry.dots(&matrix).count(), 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelArray (height x width x 3 bytes)
//!     |
//!     v
//! reduce()                 mean of every byte in each full block
//!     |                    darkness = 1 - mean / 256
//!     v
//! DarknessMatrix           columns = width / b, rows = height / b
//!     |
//!     v
//! DotGeometry::dots()      radius = base_radius * sqrt(curve(darkness))
//!     |
//!     v
//! Dot { cx, cy, r }        consumed by the raster and vector renderers
//! ```
//!
//! ## Why the square root
//!
//! Perceived ink coverage follows dot *area*, which grows with the square of
//! the radius. Taking the square root of the curved darkness makes the area,
//! not the radius, proportional to it.
//!
//! ## Darkness factor
//!
//! A full-black block gets the block's inscribed circle (radius `b / 2`) at
//! `darkness_factor = 0` and its circumscribed circle (radius `b / sqrt(2)`)
//! at `darkness_factor = 1`. Only the latter covers the block completely, at
//! the cost of overlapping neighbours.

pub mod config;
pub mod curve;
pub mod geometry;
pub mod matrix;
pub mod pixels;
pub mod reduce;

#[cfg(test)]
mod domain_tests;

pub use config::{ConfigError, HalftoneConfig};
pub use curve::curve;
pub use geometry::{Dot, DotGeometry};
pub use matrix::DarknessMatrix;
pub use pixels::{PixelArray, PixelArrayError};
pub use reduce::{reduce, BlockSize};

//! Dot placement and sizing shared by the raster and vector renderers.

use crate::curve::curve;
use crate::matrix::DarknessMatrix;
use crate::reduce::BlockSize;
use std::f64::consts::SQRT_2;

/// A filled circle in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Maps darkness matrix cells to dots.
///
/// Lengths are in source-pixel units unless the geometry was built with
/// [`DotGeometry::scaled`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotGeometry {
    /// Side length of one block in output units
    block: f64,
    /// Radius of a dot for a fully black block
    base_radius: f64,
}

impl DotGeometry {
    /// Geometry for blocks of side `blocksize`.
    ///
    /// `darkness_factor` interpolates the maximum radius linearly between
    /// the inscribed circle (0) and the circumscribed circle (1).
    pub fn new(blocksize: BlockSize, darkness_factor: f64) -> Self {
        let b = blocksize.get() as f64;
        Self {
            block: b,
            base_radius: 0.5 * b + darkness_factor * (0.5 * SQRT_2 - 0.5) * b,
        }
    }

    /// The same geometry with every length multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            block: self.block * factor,
            base_radius: self.base_radius * factor,
        }
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Radius of the dot for a block of the given darkness.
    ///
    /// Dot area, not radius, tracks `curve(darkness)`.
    pub fn radius(&self, darkness: f64) -> f64 {
        self.base_radius * curve(darkness).sqrt()
    }

    /// Center of the dot for the block at `(column, row)`.
    pub fn center(&self, column: usize, row: usize) -> (f64, f64) {
        (
            (column as f64 + 0.5) * self.block,
            (row as f64 + 0.5) * self.block,
        )
    }

    /// One dot per matrix cell, row-major. White cells yield `r == 0`.
    pub fn dots<'a>(&'a self, matrix: &'a DarknessMatrix) -> impl Iterator<Item = Dot> + 'a {
        matrix.cells().map(move |(column, row, darkness)| {
            let (cx, cy) = self.center(column, row);
            Dot {
                cx,
                cy,
                r: self.radius(darkness),
            }
        })
    }
}

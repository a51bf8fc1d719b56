//! Block reduction: pixel grid to darkness matrix.
//!
//! Each full `b x b` block is reduced to a single scalar, the mean of every
//! byte of every channel in the block. Channels are deliberately not
//! luminance-weighted. Trailing strips narrower than one block are dropped.

use crate::matrix::DarknessMatrix;
use crate::pixels::{PixelArray, CHANNELS};
use std::fmt;
use std::num::NonZeroUsize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Side length of a square block in source pixels. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSize(NonZeroUsize);

impl BlockSize {
    /// Block size used when none is given on the command line.
    pub const DEFAULT: Self = match NonZeroUsize::new(8) {
        Some(n) => Self(n),
        None => unreachable!(),
    };

    /// Returns `None` for zero.
    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for BlockSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reduce `pixels` to one darkness value per full block.
///
/// The result has `width / b` columns and `height / b` rows (integer
/// division). A block larger than the image yields an empty matrix.
///
/// # Example
///
/// ```
/// use halftone_grid::{reduce, BlockSize, PixelArray};
///
/// // 20x9 white image, blocks of 8: one strip on each axis is dropped
/// let pixels = PixelArray::filled(20, 9, [255, 255, 255]);
/// let matrix = reduce(&pixels, BlockSize::new(8).unwrap());
///
/// assert_eq!((matrix.columns(), matrix.rows()), (2, 1));
/// assert_eq!(matrix.get(1, 0), Some(1.0 - 255.0 / 256.0));
/// ```
pub fn reduce(pixels: &PixelArray, blocksize: BlockSize) -> DarknessMatrix {
    let b = blocksize.get();
    let columns = pixels.width() / b;
    let rows = pixels.height() / b;
    let cells = columns * rows;

    let darkness_at = |index: usize| block_darkness(pixels, index % columns, index / columns, b);

    #[cfg(feature = "parallel")]
    let values: Vec<f64> = (0..cells).into_par_iter().map(darkness_at).collect();
    #[cfg(not(feature = "parallel"))]
    let values: Vec<f64> = (0..cells).map(darkness_at).collect();

    DarknessMatrix::from_row_major(columns, rows, values)
}

/// `1 - mean / 256` over every byte in the block at `(column, row)`.
fn block_darkness(pixels: &PixelArray, column: usize, row: usize, b: usize) -> f64 {
    let x0 = column * b;
    let y0 = row * b;

    let sum: u64 = (y0..y0 + b)
        .map(|y| {
            pixels
                .row_span(x0, y, b)
                .iter()
                .map(|&v| v as u64)
                .sum::<u64>()
        })
        .sum();

    let count = (b * b * CHANNELS) as f64;
    let mean = sum as f64 / count;
    1.0 - mean / 256.0
}

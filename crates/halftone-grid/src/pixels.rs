//! Dense three-channel pixel storage.

use std::fmt;

/// Number of bytes per pixel (red, green, blue).
pub const CHANNELS: usize = 3;

/// Error returned when a byte buffer does not describe a `width x height`
/// RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelArrayError {
    /// Buffer length differs from `width * height * 3`
    LengthMismatch {
        /// Length implied by the dimensions
        expected: usize,
        /// Length of the buffer that was supplied
        actual: usize,
    },
}

impl fmt::Display for PixelArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelArrayError::LengthMismatch { expected, actual } => write!(
                f,
                "pixel buffer has {} bytes, expected {} (width * height * 3)",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for PixelArrayError {}

/// An immutable `height x width x 3` grid of bytes in row-major order.
///
/// Every pixel carries exactly three channels regardless of the layout of
/// the image it was decoded from.
///
/// # Example
///
/// ```
/// use halftone_grid::PixelArray;
///
/// let pixels = PixelArray::new(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
/// assert_eq!(pixels.pixel(1, 0), [255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelArray {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelArray {
    /// Wrap an RGB buffer, validating its length against the dimensions.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, PixelArrayError> {
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(PixelArrayError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a pixel array where every pixel has the same color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width * height * CHANNELS)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw bytes, row-major, three per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The bytes of `len` consecutive pixels starting at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the span runs past the end of row `y`.
    pub fn row_span(&self, x: usize, y: usize, len: usize) -> &[u8] {
        assert!(x + len <= self.width && y < self.height);
        let start = (y * self.width + x) * CHANNELS;
        &self.data[start..start + len * CHANNELS]
    }

    /// The channels of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let span = self.row_span(x, y, 1);
        [span[0], span[1], span[2]]
    }
}

//! Contrast curve applied to darkness before computing dot radii.

use std::f64::consts::PI;

/// Push mid-tones toward the extremes while keeping 0, 0.5 and 1 fixed.
///
/// `curve(x) = sin(pi * (x - 0.5)) / 2 + 0.5`, strictly increasing on
/// `[0, 1]` with its steepest slope at 0.5. Inputs outside `[0, 1]` are not
/// clamped.
///
/// ```
/// use halftone_grid::curve;
///
/// assert!(curve(0.0).abs() < 1e-12);
/// assert!((curve(0.5) - 0.5).abs() < 1e-12);
/// assert!(curve(0.25) < 0.25);
/// ```
#[inline]
pub fn curve(x: f64) -> f64 {
    (PI * (x - 0.5)).sin() / 2.0 + 0.5
}

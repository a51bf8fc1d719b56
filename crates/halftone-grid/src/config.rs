//! Rendering parameters passed explicitly into both renderers.

use std::fmt;

/// Error returned by [`HalftoneConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `darkness_factor` is outside `[0, 1]` (or NaN)
    DarknessFactorOutOfRange(f64),
    /// `scaling_factor` is zero
    ZeroScalingFactor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DarknessFactorOutOfRange(d) => {
                write!(f, "darkness factor must be within [0, 1], got {}", d)
            }
            ConfigError::ZeroScalingFactor => write!(f, "scaling factor must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Geometry and supersampling settings.
///
/// # Defaults
///
/// - `darkness_factor`: 0.0 (a black block becomes its inscribed circle)
/// - `scaling_factor`: 4 (raster is drawn at 4x and downsampled)
///
/// # Example
///
/// ```
/// use halftone_grid::HalftoneConfig;
///
/// let config = HalftoneConfig::new().darkness_factor(0.5).scaling_factor(2);
/// assert!(config.validate().is_ok());
/// assert!(HalftoneConfig::new().scaling_factor(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalftoneConfig {
    /// Interpolates a full dot between inscribed (0) and circumscribed (1)
    /// circle of its block.
    pub darkness_factor: f64,

    /// Linear supersampling multiplier for the raster renderer. The vector
    /// renderer ignores it.
    pub scaling_factor: u32,
}

impl HalftoneConfig {
    pub const DEFAULT_DARKNESS_FACTOR: f64 = 0.0;
    pub const DEFAULT_SCALING_FACTOR: u32 = 4;

    pub fn new() -> Self {
        Self {
            darkness_factor: Self::DEFAULT_DARKNESS_FACTOR,
            scaling_factor: Self::DEFAULT_SCALING_FACTOR,
        }
    }

    pub fn darkness_factor(mut self, factor: f64) -> Self {
        self.darkness_factor = factor;
        self
    }

    pub fn scaling_factor(mut self, factor: u32) -> Self {
        self.scaling_factor = factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.darkness_factor) {
            return Err(ConfigError::DarknessFactorOutOfRange(self.darkness_factor));
        }
        if self.scaling_factor == 0 {
            return Err(ConfigError::ZeroScalingFactor);
        }
        Ok(())
    }
}

impl Default for HalftoneConfig {
    fn default() -> Self {
        Self::new()
    }
}

use crate::error::ConfigError;
use crate::output::DEFAULT_OUT_DIR;
use crate::rendering::Background;
use halftone_grid::HalftoneConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Run settings, loaded from an optional YAML file and overridden by
/// command-line flags.
///
/// ```yaml
/// darkness_factor: 0.25
/// scaling_factor: 8
/// background: white
/// out_dir: renders
/// optimize: true
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Maximum dot size between inscribed (0) and circumscribed (1) circle
    #[serde(default)]
    pub darkness_factor: f64,

    /// Raster supersampling multiplier
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: u32,

    /// PNG canvas fill
    #[serde(default)]
    pub background: Background,

    /// Directory receiving the PNG and SVG
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Re-compress PNG output with oxipng
    #[serde(default)]
    pub optimize: bool,
}

fn default_scaling_factor() -> u32 {
    HalftoneConfig::DEFAULT_SCALING_FACTOR
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

/// Values given on the command line; `None` keeps the file/default value.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub darkness_factor: Option<f64>,
    pub scaling_factor: Option<u32>,
    pub background: Option<Background>,
    pub out_dir: Option<PathBuf>,
    pub optimize: Option<bool>,
}

impl Settings {
    /// Read settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_yaml::from_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Load from `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(d) = overrides.darkness_factor {
            self.darkness_factor = d;
        }
        if let Some(s) = overrides.scaling_factor {
            self.scaling_factor = s;
        }
        if let Some(b) = overrides.background {
            self.background = b;
        }
        if let Some(dir) = overrides.out_dir {
            self.out_dir = dir;
        }
        if let Some(optimize) = overrides.optimize {
            self.optimize = optimize;
        }
        self
    }

    /// The validated renderer parameters.
    pub fn halftone_config(&self) -> Result<HalftoneConfig, ConfigError> {
        let config = HalftoneConfig::new()
            .darkness_factor(self.darkness_factor)
            .scaling_factor(self.scaling_factor);
        config.validate()?;
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            darkness_factor: HalftoneConfig::DEFAULT_DARKNESS_FACTOR,
            scaling_factor: default_scaling_factor(),
            background: Background::default(),
            out_dir: default_out_dir(),
            optimize: false,
        }
    }
}

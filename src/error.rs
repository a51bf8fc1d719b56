use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HalftoneError {
    #[error("Unsupported image format: {channels} channel(s), expected 1, 3 or 4")]
    UnsupportedFormat { channels: u8 },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Malformed pixel buffer: {0}")]
    Pixels(#[from] halftone_grid::PixelArrayError),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

impl HalftoneError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HalftoneError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("block size must be a positive integer")]
    ZeroBlockSize,

    #[error("{0}")]
    Geometry(#[from] halftone_grid::ConfigError),

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

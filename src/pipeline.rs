use crate::error::{HalftoneError, RenderError};
use crate::loader;
use crate::output::OutputPaths;
use crate::rendering::{OutputSize, RasterRenderer, VectorRenderer};
use crate::settings::Settings;
use halftone_grid::{reduce, BlockSize, DarknessMatrix, PixelArray};
use std::path::Path;

/// Both renderings of one darkness matrix, held in memory.
pub struct Rendered {
    pub matrix: DarknessMatrix,
    pub png: Vec<u8>,
    pub svg: String,
}

/// Load → reduce → render (PNG and SVG concurrently) → commit.
pub struct Halftoner {
    settings: Settings,
    raster: RasterRenderer,
    vector: VectorRenderer,
}

impl Halftoner {
    /// Validates the geometry settings up front.
    pub fn new(settings: Settings) -> Result<Self, HalftoneError> {
        let config = settings.halftone_config()?;
        Ok(Self {
            raster: RasterRenderer::new(config)
                .background(settings.background)
                .optimize(settings.optimize),
            vector: VectorRenderer::new(config),
            settings,
        })
    }

    /// Convert `source` and write `<out_dir>/<stem>-<blocksize>.{png,svg}`.
    ///
    /// Either both files are written or neither is.
    pub fn run(&self, source: &Path, blocksize: BlockSize) -> Result<OutputPaths, HalftoneError> {
        let pixels = loader::load_pixels(source)?;
        let rendered = self.render(&pixels, blocksize)?;

        let paths = OutputPaths::new(&self.settings.out_dir, source, blocksize);
        paths.commit(&rendered.png, rendered.svg.as_bytes())?;

        tracing::info!(
            png = %paths.png.display(),
            svg = %paths.svg.display(),
            "Wrote halftone"
        );
        Ok(paths)
    }

    /// Reduce `pixels` and render both formats without touching the disk.
    pub fn render(
        &self,
        pixels: &PixelArray,
        blocksize: BlockSize,
    ) -> Result<Rendered, HalftoneError> {
        let size = output_size(pixels)?;

        let matrix = reduce(pixels, blocksize);
        tracing::info!(
            columns = matrix.columns(),
            rows = matrix.rows(),
            %blocksize,
            "Reduced image to darkness matrix"
        );

        let (png, svg) = rayon::join(
            || self.raster.render(&matrix, size, blocksize),
            || self.vector.render(&matrix, size, blocksize).to_string(),
        );

        Ok(Rendered {
            png: png?,
            svg,
            matrix,
        })
    }
}

fn output_size(pixels: &PixelArray) -> Result<OutputSize, RenderError> {
    match (u32::try_from(pixels.width()), u32::try_from(pixels.height())) {
        (Ok(width), Ok(height)) => Ok(OutputSize::new(width, height)),
        _ => Err(RenderError::UnsupportedDimensions {
            width: pixels.width().try_into().unwrap_or(u32::MAX),
            height: pixels.height().try_into().unwrap_or(u32::MAX),
        }),
    }
}

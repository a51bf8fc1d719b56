use super::{Background, OutputSize};
use crate::error::RenderError;
use halftone_grid::{BlockSize, DarknessMatrix, DotGeometry, HalftoneConfig};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::io::Cursor;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

/// Renders a darkness matrix to PNG.
///
/// Dots are filled without edge anti-aliasing on a canvas `scaling_factor`
/// times larger than the output, which is then downsampled with a bilinear
/// filter. The downsample is the only smoothing step.
pub struct RasterRenderer {
    config: HalftoneConfig,
    background: Background,
    /// Re-compress the encoded PNG with oxipng
    optimize: bool,
}

impl RasterRenderer {
    pub fn new(config: HalftoneConfig) -> Self {
        Self {
            config,
            background: Background::default(),
            optimize: false,
        }
    }

    pub fn background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    /// Render to encoded PNG bytes (8-bit RGBA).
    pub fn render(
        &self,
        matrix: &DarknessMatrix,
        size: OutputSize,
        blocksize: BlockSize,
    ) -> Result<Vec<u8>, RenderError> {
        let image = self.rasterize(matrix, size, blocksize)?;
        let png_bytes = encode_png(&image, self.optimize)?;

        if !self.optimize {
            return Ok(png_bytes);
        }

        // Re-compress with oxipng (zopfli + adaptive filter selection)
        let optimized = oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        )
        .unwrap_or(png_bytes);
        Ok(optimized)
    }

    /// Draw the dots and downsample to `size`. Returns straight (not
    /// premultiplied) RGBA.
    pub fn rasterize(
        &self,
        matrix: &DarknessMatrix,
        size: OutputSize,
        blocksize: BlockSize,
    ) -> Result<RgbaImage, RenderError> {
        let factor = self.config.scaling_factor;
        let unsupported = RenderError::UnsupportedDimensions {
            width: size.width,
            height: size.height,
        };
        let (Some(canvas_width), Some(canvas_height)) = (
            size.width.checked_mul(factor),
            size.height.checked_mul(factor),
        ) else {
            return Err(unsupported);
        };
        if canvas_width == 0 || canvas_height == 0 {
            return Err(unsupported);
        }

        let mut pixmap =
            Pixmap::new(canvas_width, canvas_height).ok_or(RenderError::PixmapAllocation)?;
        if self.background == Background::White {
            pixmap.fill(Color::WHITE);
        }

        let geometry =
            DotGeometry::new(blocksize, self.config.darkness_factor).scaled(factor as f64);

        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.anti_alias = false;

        let mut drawn = 0usize;
        for dot in geometry.dots(matrix) {
            // Zero-radius dots have no path
            let Some(path) = PathBuilder::from_circle(dot.cx as f32, dot.cy as f32, dot.r as f32)
            else {
                continue;
            };
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            drawn += 1;
        }

        tracing::debug!(
            canvas_width,
            canvas_height,
            base_radius = geometry.base_radius(),
            drawn,
            "Rasterized dots"
        );

        let supersampled = RgbaImage::from_raw(canvas_width, canvas_height, pixmap.take())
            .ok_or(RenderError::PixmapAllocation)?;
        let mut image =
            imageops::resize(&supersampled, size.width, size.height, FilterType::Triangle);
        demultiply(&mut image);
        Ok(image)
    }
}

/// Convert premultiplied RGBA (tiny-skia's storage) to straight alpha.
fn demultiply(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let a = pixel[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut pixel.0[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Encode straight RGBA as an 8-bit PNG.
fn encode_png(image: &RgbaImage, fast: bool) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        // oxipng will re-compress optimally
        if fast {
            encoder.set_compression(png::Compression::Fast);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

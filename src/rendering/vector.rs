use super::OutputSize;
use halftone_grid::{BlockSize, DarknessMatrix, DotGeometry, HalftoneConfig};
use svg::node::element::{Circle, Group};
use svg::Document;

const DOT_FILL: &str = "rgb(0%,0%,0%)";

/// Renders a darkness matrix to an SVG document at true scale.
///
/// The supersampling factor is irrelevant here; only the darkness factor of
/// the config is used.
pub struct VectorRenderer {
    config: HalftoneConfig,
}

impl VectorRenderer {
    pub fn new(config: HalftoneConfig) -> Self {
        Self { config }
    }

    /// Build the document: one group holding one circle per matrix cell.
    pub fn render(
        &self,
        matrix: &DarknessMatrix,
        size: OutputSize,
        blocksize: BlockSize,
    ) -> Document {
        let geometry = DotGeometry::new(blocksize, self.config.darkness_factor);

        let group = geometry.dots(matrix).fold(Group::new(), |group, dot| {
            group.add(
                Circle::new()
                    .set("cx", dot.cx)
                    .set("cy", dot.cy)
                    .set("r", dot.r)
                    .set("fill", DOT_FILL),
            )
        });

        tracing::debug!(
            base_radius = geometry.base_radius(),
            dots = matrix.columns() * matrix.rows(),
            "Built SVG document"
        );

        Document::new()
            .set("width", size.width)
            .set("height", size.height)
            .add(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bs(n: usize) -> BlockSize {
        BlockSize::new(n).unwrap()
    }

    #[test]
    fn test_one_circle_per_cell() {
        let matrix = DarknessMatrix::from_row_major(3, 2, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        let svg = VectorRenderer::new(HalftoneConfig::default())
            .render(&matrix, OutputSize::new(24, 16), bs(8))
            .to_string();
        assert_eq!(svg.matches("<circle").count(), 6);
    }

    #[test]
    fn test_document_size_attributes() {
        let matrix = DarknessMatrix::from_row_major(0, 0, Vec::new());
        let svg = VectorRenderer::new(HalftoneConfig::default())
            .render(&matrix, OutputSize::new(640, 480), bs(8))
            .to_string();
        assert!(svg.contains("width=\"640\""));
        assert!(svg.contains("height=\"480\""));
        assert_eq!(svg.matches("<circle").count(), 0);
    }

    #[test]
    fn test_black_cell_circle() {
        let matrix = DarknessMatrix::from_row_major(1, 1, vec![1.0]);
        let svg = VectorRenderer::new(HalftoneConfig::default())
            .render(&matrix, OutputSize::new(8, 8), bs(8))
            .to_string();
        assert!(svg.contains("cx=\"4\""));
        assert!(svg.contains("cy=\"4\""));
        assert!(svg.contains("r=\"4\""));
        assert!(svg.contains(DOT_FILL));
    }

    #[test]
    fn test_scaling_factor_ignored() {
        let matrix = DarknessMatrix::from_row_major(1, 1, vec![1.0]);
        let a = VectorRenderer::new(HalftoneConfig::new().scaling_factor(1))
            .render(&matrix, OutputSize::new(8, 8), bs(8))
            .to_string();
        let b = VectorRenderer::new(HalftoneConfig::new().scaling_factor(16))
            .render(&matrix, OutputSize::new(8, 8), bs(8))
            .to_string();
        assert_eq!(a, b);
    }
}

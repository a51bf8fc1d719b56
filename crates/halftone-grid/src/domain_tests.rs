//! End-to-end regression tests across reduce, curve and geometry.
//!
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::curve::curve;
    use crate::geometry::DotGeometry;
    use crate::pixels::PixelArray;
    use crate::reduce::{reduce, BlockSize};
    use crate::HalftoneConfig;

    const EPS: f64 = 1e-12;

    /// If this breaks, it means: the mid-gray reference case no longer
    /// produces four identical half-dark dots. 128/256 is exactly 0.5.
    #[test]
    fn test_solid_gray_reference_case() {
        let pixels = PixelArray::filled(16, 16, [128, 128, 128]);
        let blocksize = BlockSize::new(8).unwrap();
        let matrix = reduce(&pixels, blocksize);

        assert_eq!((matrix.columns(), matrix.rows()), (2, 2));
        for (_, _, v) in matrix.cells() {
            assert!((v - 0.5).abs() < EPS, "expected 0.5, got {v}");
        }

        let geometry = DotGeometry::new(blocksize, HalftoneConfig::default().darkness_factor);
        let expected = geometry.base_radius() * curve(0.5).sqrt();
        let dots: Vec<_> = geometry.dots(&matrix).collect();
        assert_eq!(dots.len(), 4);
        for dot in dots {
            assert!((dot.r - expected).abs() < EPS);
        }
    }

    /// If this breaks, it means: white is producing a visible dot. The
    /// reduction divides by 256, so 255 maps to 1/256 darkness, which the
    /// curve must flatten to a radius far below one pixel.
    #[test]
    fn test_white_block_has_no_visible_dot() {
        let pixels = PixelArray::filled(8, 8, [255, 255, 255]);
        let blocksize = BlockSize::new(8).unwrap();
        let matrix = reduce(&pixels, blocksize);
        let geometry = DotGeometry::new(blocksize, 0.0);
        let dot = geometry.dots(&matrix).next().unwrap();
        assert!(dot.r < 0.05, "white dot radius {} is visible", dot.r);
    }

    /// If this breaks, it means: a black block is not reaching the maximum
    /// radius selected by the darkness factor.
    #[test]
    fn test_black_block_reaches_max_radius() {
        let pixels = PixelArray::filled(10, 10, [0, 0, 0]);
        let blocksize = BlockSize::new(10).unwrap();
        let matrix = reduce(&pixels, blocksize);

        for factor in [0.0, 0.5, 1.0] {
            let geometry = DotGeometry::new(blocksize, factor);
            let dot = geometry.dots(&matrix).next().unwrap();
            assert!((dot.r - geometry.base_radius()).abs() < EPS);
        }
    }

    /// If this breaks, it means: the parallel scan reordered cells. Each
    /// block gets a distinct gray level so any permutation is visible.
    #[test]
    fn test_reduction_preserves_block_order() {
        let (columns, rows, b) = (7, 5, 3);
        let width = columns * b;
        let height = rows * b;
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                let level = ((y / b) * columns + x / b) as u8 * 7;
                data.extend_from_slice(&[level; 3]);
            }
        }
        let matrix = reduce(
            &PixelArray::new(width, height, data).unwrap(),
            BlockSize::new(b).unwrap(),
        );

        for (column, row, v) in matrix.cells() {
            let level = ((row * columns + column) * 7) as f64;
            assert!((v - (1.0 - level / 256.0)).abs() < EPS);
        }
    }
}

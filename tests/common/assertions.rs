//! Assertion and inspection helpers for rendered output.

use image::RgbaImage;

/// Assert bytes are a PNG and decode them to RGBA
pub fn assert_png(bytes: &[u8]) -> RgbaImage {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(bytes)
        .expect("PNG should decode")
        .to_rgba8()
}

/// All `r` attribute values of the circles in an SVG document, in order
pub fn svg_radii(svg: &str) -> Vec<f64> {
    svg.split("<circle")
        .skip(1)
        .map(|circle| {
            let start = circle.find(" r=\"").expect("circle without r") + 4;
            let rest = &circle[start..];
            let end = rest.find('"').expect("unterminated r attribute");
            rest[..end].parse().expect("r is not a number")
        })
        .collect()
}

/// Total alpha coverage in pixels
pub fn coverage(image: &RgbaImage) -> f64 {
    image.pixels().map(|p| p[3] as f64 / 255.0).sum()
}

/// Rasterize an SVG document with resvg at its own size
pub fn rasterize_svg(svg: &str) -> RgbaImage {
    use resvg::tiny_skia::{Pixmap, Transform};
    use resvg::usvg;

    let tree = usvg::Tree::from_str(svg, &usvg::Options::default()).expect("SVG should parse");
    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).expect("pixmap");
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    RgbaImage::from_raw(size.width(), size.height(), pixmap.take()).expect("pixmap buffer")
}

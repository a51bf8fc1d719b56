//! Source images used across tests.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// 16x16 solid gray (128): the reference case, a 2x2 matrix of 0.5 at b=8
pub fn gray_16() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([128, 128, 128])))
}

/// Solid RGB image
pub fn solid_rgb(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value; 3])))
}

/// Single-channel image with a horizontal gradient from black to white
pub fn gray_gradient(width: u32, height: u32) -> DynamicImage {
    let max = (width - 1).max(1);
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, _| {
        Luma([(x * 255 / max) as u8])
    }))
}

/// Transparent RGBA image whose color channels are all black
pub fn transparent_black(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])))
}

/// Encode an image in the given format
pub fn encode(image: &DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .expect("Failed to encode fixture");
    buf.into_inner()
}

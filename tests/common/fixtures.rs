use filterdeck::Upload;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;
use tempfile::NamedTempFile;

/// 64x48 RGB gradient with a sine texture, so every filter has something to do
pub fn textured_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(64, 48, |x, y| {
        let wave = (x as f32 * 0.7).sin() * (y as f32 * 0.5).sin();
        let base = 60.0 + x as f32 * 2.0;
        let v = (base + 35.0 * wave).clamp(0.0, 255.0) as u8;
        Rgb([v, (y * 4) as u8, 255 - v])
    }))
}

/// 20x20 RGBA image with varying alpha
pub fn translucent_image() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(20, 20, |x, y| {
        Rgba([(x * 12) as u8, (y * 12) as u8, 128, (x * 10 + y) as u8])
    }))
}

/// Encode `img` as an in-memory upload named `name`
pub fn upload_of(img: &DynamicImage, name: &str, format: ImageFormat) -> Upload {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)
        .expect("Failed to encode test image");
    Upload::new(name, bytes)
}

pub fn png_upload(img: &DynamicImage) -> Upload {
    upload_of(img, "test.png", ImageFormat::Png)
}

/// Creates a 100x100 red test image on disk and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image() -> NamedTempFile {
    let img = RgbImage::from_fn(100, 100, |_, _| Rgb([255u8, 0u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

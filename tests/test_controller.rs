mod common;

use common::*;
use filterdeck::controller::{NO_UPLOAD_WARNING, render};
use filterdeck::filters::{blur, brighten};
use image::ImageFormat;

#[test]
fn test_no_upload_shows_warning() {
    let result = render(None, &FilterParams::default());
    assert_eq!(
        result,
        Render::Empty {
            warning: NO_UPLOAD_WARNING.to_string()
        }
    );
    assert!(!result.is_ready());
}

#[test]
fn test_corrupt_upload_reports_error() {
    let upload = Upload::new("photo.jpg", vec![0xFF, 0xD8, 0x00, 0x13, 0x37]);
    let result = render(Some(&upload), &FilterParams::default());

    match result {
        Render::Failed { message } => assert!(message.starts_with("Error loading image:")),
        other => panic!("expected a failure, got {:?}", other),
    }
}

#[test]
fn test_wrong_extension_reports_error() {
    let upload = upload_of(&textured_image(), "scan.tiff", ImageFormat::Png);
    let result = render(Some(&upload), &FilterParams::default());
    assert!(matches!(result, Render::Failed { .. }));
    assert!(result.processed().is_none());
}

#[test]
fn test_zero_brightness_is_identity() {
    let img = textured_image();
    assert_eq!(brighten(&img, 0).unwrap(), img);

    let translucent = translucent_image();
    assert_eq!(brighten(&translucent, 0).unwrap(), translucent);
}

#[test]
fn test_enhance_off_equals_blur_then_brighten() {
    let img = textured_image();
    let upload = png_upload(&img);
    let params = FilterParams::new(1.7, -20, false).unwrap();

    let expected = brighten(&blur(&img, 1.7).unwrap(), -20).unwrap();
    let result = render(Some(&upload), &params);

    assert_eq!(result.processed(), Some(&expected));
}

#[test]
fn test_enhance_on_changes_result() {
    let upload = png_upload(&textured_image());
    let params = FilterParams::new(0.5, 10, false).unwrap();

    let plain = render(Some(&upload), &params);
    let enhanced = render(Some(&upload), &params.with_enhance(true));

    assert!(enhanced.is_ready());
    assert_ne!(plain.processed(), enhanced.processed());
}

#[test]
fn test_original_is_the_decoded_upload() {
    let img = translucent_image();
    let upload = png_upload(&img);
    let params = FilterParams::new(2.0, 30, true).unwrap();

    let Render::Ready {
        original,
        processed,
    } = render(Some(&upload), &params)
    else {
        panic!("render failed");
    };
    assert_eq!(*original, img);
    assert_eq!((processed.width(), processed.height()), (20, 20));
    assert_eq!(processed.color(), img.color());
}

#[test]
fn test_render_is_idempotent() {
    let upload = upload_of(&textured_image(), "frame.JPEG", ImageFormat::Jpeg);
    let params = FilterParams::new(3.5, 50, true).unwrap();

    let first = render(Some(&upload), &params);
    let second = render(Some(&upload), &params);
    assert!(first.is_ready());
    assert_eq!(first, second);
}

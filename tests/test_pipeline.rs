mod common;

use common::*;
use filterdeck::filters::steps::{BlurStep, BrightenStep};
use filterdeck::{render, render_with};

#[test]
fn test_debug_writes_one_png_per_step() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let debug_dir = dir.path().join("steps");
    let params = FilterParams::default().with_enhance(true);

    let pipeline = Pipeline::for_params(&params).with_debug(debug_dir.clone())?;
    let result = render_with(Some(&png_upload(&textured_image())), &pipeline);
    assert!(result.is_ready());

    let mut names: Vec<String> = std::fs::read_dir(&debug_dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    names.sort();
    assert_eq!(
        names,
        vec![
            "00_input.png",
            "01_gaussian_blur.png",
            "02_brightness.png",
            "03_detail_enhancement.png",
        ]
    );

    let last = image::open(debug_dir.join("03_detail_enhancement.png"))?;
    assert_eq!(Some(&last), result.processed());
    Ok(())
}

#[test]
fn test_debug_refuses_non_empty_dir() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    std::fs::write(dir.path().join("leftover.txt"), b"x")?;

    let err = Pipeline::new()
        .with_debug(dir.path().to_path_buf())
        .err()
        .expect("non-empty directory must be rejected");
    assert!(matches!(err, FilterError::InvalidParameter { .. }));
    Ok(())
}

#[test]
fn test_custom_pipeline_reports_failing_step() {
    let pipeline = Pipeline::new()
        .add_step_boxed(Box::new(BrightenStep { offset: 5 }))
        .add_step_boxed(Box::new(BlurStep { sigma: -1.0 }));

    match render_with(Some(&png_upload(&textured_image())), &pipeline) {
        Render::Failed { message } => assert!(message.starts_with("Error applying blur:")),
        other => panic!("expected a failure, got {:?}", other),
    }
}

#[test]
fn test_blur_strength_sweep_keeps_dimensions() {
    let upload = png_upload(&textured_image());
    for tenth in 5..=35 {
        let params = FilterParams::new(tenth as f32 / 10.0, 0, false).unwrap();
        let result = render(Some(&upload), &params);
        let processed = result.processed().expect("blur must not fail");
        assert_eq!((processed.width(), processed.height()), (64, 48));
    }
}

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use filterdeck::params::{DEFAULT_BLUR, DEFAULT_BRIGHTNESS};
use filterdeck::{FilterParams, Pipeline, Render, Upload};

#[derive(Parser)]
#[command(name = "filterdeck")]
#[command(about = "Play with image filters: blur, brightness and detail enhancement")]
struct Cli {
    /// Image to process (jpg, png, jpeg); opens the GUI when omitted
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Blur strength, 0.5 to 3.5
    #[arg(long, default_value_t = DEFAULT_BLUR)]
    blur: f32,

    /// Brightness offset, -50 to 50
    #[arg(long, default_value_t = DEFAULT_BRIGHTNESS, allow_negative_numbers = true)]
    brightness: i32,

    /// Apply the detail enhancement filter
    #[arg(long)]
    enhance: bool,

    /// Write the processed image here
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Save every step's output to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    filterdeck::init_logger(args.verbose);

    let params = FilterParams::new(args.blur, args.brightness, args.enhance)?;

    let Some(image_path) = args.image_path else {
        return launch_gui(params);
    };

    let upload = Upload::from_path(&image_path)?;

    let mut pipeline = Pipeline::for_params(&params).with_verbose(args.verbose);
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    match filterdeck::render_with(Some(&upload), &pipeline) {
        Render::Empty { warning } => println!("{}", warning),
        Render::Failed { message } => anyhow::bail!(message),
        Render::Ready {
            original,
            processed,
        } => {
            println!(
                "Processed {} ({}x{}) with blur={:.1} brightness={} enhance={}",
                upload.name,
                original.width(),
                original.height(),
                params.blur,
                params.brightness,
                params.enhance
            );

            if let Some(output) = args.output {
                processed
                    .save(&output)
                    .with_context(|| format!("Failed to save {}", output.display()))?;
                println!("Saved processed image to {}", output.display());
            }
        }
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn launch_gui(params: FilterParams) -> anyhow::Result<()> {
    filterdeck::gui::FilterdeckApp::run(params)
        .map_err(|e| anyhow::anyhow!("GUI exited with an error: {}", e))
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_params: FilterParams) -> anyhow::Result<()> {
    println!("{}", filterdeck::controller::NO_UPLOAD_WARNING);
    Ok(())
}

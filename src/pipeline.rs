use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{FilterError, Result};
use crate::filters::steps::{BlurStep, BrightenStep, EnhanceStep};
use crate::params::FilterParams;

/// Data that flows through the pipeline
#[derive(Clone)]
pub struct PipelineData {
    /// The current image (replaced by every step)
    pub image: DynamicImage,

    /// The decoded input, shared with the display via Arc
    pub original: Arc<DynamicImage>,
}

impl PipelineData {
    /// Create PipelineData for a freshly loaded image
    pub fn from_image(image: DynamicImage) -> Self {
        let original = Arc::new(image.clone());
        Self { image, original }
    }

    /// Replace the current image, keeping the original
    pub fn with_image(self, image: DynamicImage) -> Self {
        Self {
            image,
            original: self.original,
        }
    }
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory receiving one PNG per step
    pub output_dir: PathBuf,
}

/// Context available to all pipeline steps
#[derive(Clone, Default)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Transform the data; the returned image replaces the current one
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData>;

    /// Human-readable name for this step (used in logs and debug file names)
    fn name(&self) -> &str;
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// The fixed render order: blur, brighten, then enhance when enabled
    pub fn for_params(params: &FilterParams) -> Self {
        let pipeline = Self::new()
            .add_step(Arc::new(BlurStep { sigma: params.blur }))
            .add_step(Arc::new(BrightenStep {
                offset: params.brightness,
            }));

        if params.enhance {
            pipeline.add_step(Arc::new(EnhanceStep))
        } else {
            pipeline
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory.
    /// The directory must be empty or non-existent.
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(FilterError::InvalidParameter {
                    name: "debug_out".to_string(),
                    reason: format!("directory is not empty: {}", output_dir.display()),
                });
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    /// Names of the steps, in execution order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step in order on `input`
    pub fn run(&self, input: DynamicImage) -> Result<PipelineData> {
        self.save_debug(0, "input", &input)?;

        let mut data = PipelineData::from_image(input);

        for (step_idx, step) in self.steps.iter().enumerate() {
            if self.context.verbose {
                log::info!("Running step: {}", step.name());
            } else {
                log::debug!("Running step: {}", step.name());
            }

            data = step.process(data, &self.context)?;
            self.save_debug(step_idx + 1, step.name(), &data.image)?;
        }

        Ok(data)
    }

    fn save_debug(&self, index: usize, name: &str, image: &DynamicImage) -> Result<()> {
        let Some(debug_config) = &self.context.debug else {
            return Ok(());
        };

        let filename = debug_file_name(index, name);
        let output_path = debug_config.output_dir.join(&filename);
        save_png(image, &output_path)?;

        log::info!("Debug: saved {}", filename);
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// "Gaussian Blur" at index 1 becomes "01_gaussian_blur.png"
pub fn debug_file_name(index: usize, step_name: &str) -> String {
    format!(
        "{:02}_{}.png",
        index,
        step_name.to_lowercase().replace(' ', "_")
    )
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| FilterError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

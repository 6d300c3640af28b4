use crate::error::Result;
use crate::filters::{adjust, enhance};
use crate::pipeline::{PipelineContext, PipelineData, PipelineStep};

/// Apply Gaussian blur
pub struct BlurStep {
    pub sigma: f32,
}

impl PipelineStep for BlurStep {
    fn process(&self, data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let blurred = adjust::blur(&data.image, self.sigma)?;
        Ok(data.with_image(blurred))
    }

    fn name(&self) -> &str {
        "Gaussian Blur"
    }
}

/// Shift brightness by a signed offset
pub struct BrightenStep {
    pub offset: i32,
}

impl PipelineStep for BrightenStep {
    fn process(&self, data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let brightened = adjust::brighten(&data.image, self.offset)?;
        Ok(data.with_image(brightened))
    }

    fn name(&self) -> &str {
        "Brightness"
    }
}

/// Boost fine detail
pub struct EnhanceStep;

impl PipelineStep for EnhanceStep {
    fn process(&self, data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let enhanced = enhance::enhance_details(&data.image)?;
        Ok(data.with_image(enhanced))
    }

    fn name(&self) -> &str {
        "Detail Enhancement"
    }
}

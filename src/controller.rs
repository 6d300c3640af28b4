//! One render pass: upload + parameters in, something to display out.
//!
//! Every failure is turned into a message here; nothing escapes to the
//! caller as an error.

use image::DynamicImage;
use std::sync::Arc;

use crate::filters::{Upload, load_image};
use crate::params::FilterParams;
use crate::pipeline::Pipeline;

pub const NO_UPLOAD_WARNING: &str = "Please upload an image.";
pub const ORIGINAL_CAPTION: &str = "Original Image";
pub const PROCESSED_CAPTION: &str = "Processed Image";

/// Outcome of a render pass
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    /// Nothing uploaded yet
    Empty { warning: String },
    /// Loading or a filter failed; nothing to show
    Failed { message: String },
    /// Both images ready for side-by-side display
    Ready {
        original: Arc<DynamicImage>,
        processed: DynamicImage,
    },
}

impl Render {
    pub fn is_ready(&self) -> bool {
        matches!(self, Render::Ready { .. })
    }

    pub fn processed(&self) -> Option<&DynamicImage> {
        match self {
            Render::Ready { processed, .. } => Some(processed),
            _ => None,
        }
    }
}

/// Recompute the display from scratch with the standard pipeline
pub fn render(upload: Option<&Upload>, params: &FilterParams) -> Render {
    render_with(upload, &Pipeline::for_params(params))
}

/// Recompute the display from scratch with a prepared pipeline
pub fn render_with(upload: Option<&Upload>, pipeline: &Pipeline) -> Render {
    let Some(upload) = upload else {
        log::warn!("{}", NO_UPLOAD_WARNING);
        return Render::Empty {
            warning: NO_UPLOAD_WARNING.to_string(),
        };
    };

    let image = match load_image(upload) {
        Ok(image) => image,
        Err(e) => {
            log::error!("{}", e);
            return Render::Failed {
                message: e.to_string(),
            };
        }
    };

    match pipeline.run(image) {
        Ok(data) => Render::Ready {
            original: data.original,
            processed: data.image,
        },
        Err(e) => {
            log::error!("{}", e);
            Render::Failed {
                message: e.to_string(),
            }
        }
    }
}

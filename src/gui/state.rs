use iced::widget::image::Handle;
use image::DynamicImage;

use crate::controller::{NO_UPLOAD_WARNING, Render};
use crate::filters::Upload;
use crate::params::FilterParams;

/// What the main area shows after a render pass
#[derive(Debug, Clone)]
pub enum Display {
    Warning(String),
    Error(String),
    Images { original: Handle, processed: Handle },
}

impl From<Render> for Display {
    fn from(render: Render) -> Self {
        match render {
            Render::Empty { warning } => Display::Warning(warning),
            Render::Failed { message } => Display::Error(message),
            Render::Ready {
                original,
                processed,
            } => Display::Images {
                original: to_handle(&original),
                processed: to_handle(&processed),
            },
        }
    }
}

fn to_handle(img: &DynamicImage) -> Handle {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Handle::from_rgba(width, height, rgba.into_raw())
}

#[derive(Debug)]
pub struct AppState {
    pub params: FilterParams,
    /// Most recently picked file; replaced by the next pick
    pub upload: Option<Upload>,
    pub display: Display,
}

impl AppState {
    pub fn new(params: FilterParams) -> Self {
        Self {
            params,
            upload: None,
            display: Display::Warning(NO_UPLOAD_WARNING.to_string()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FilterParams::default())
    }
}

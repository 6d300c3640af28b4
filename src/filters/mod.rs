pub mod adjust;
pub mod enhance;
pub mod load;
pub mod steps;

use image::{DynamicImage, ImageBuffer, Pixel};
use imageproc::definitions::Image;

pub use adjust::{blur, brighten};
pub use enhance::enhance_details;
pub use load::{Upload, load_image};

/// An operation over an 8-bit buffer that keeps its pixel layout.
///
/// Filters implement this once and `apply_op` dispatches it over the
/// layouts a loaded image can have.
pub(crate) trait BufferOp {
    fn apply<P>(&self, buf: &Image<P>) -> Option<Image<P>>
    where
        P: Pixel<Subpixel = u8>;
}

/// Run `op` on `img`, keeping grey/colour and alpha as they are.
///
/// Returns `None` when the op produced a buffer of the wrong size.
pub(crate) fn apply_op<O: BufferOp>(img: &DynamicImage, op: &O) -> Option<DynamicImage> {
    let out = match img {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(op.apply(buf)?),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(op.apply(buf)?),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(op.apply(buf)?),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(op.apply(buf)?),
        other if other.color().has_alpha() => {
            DynamicImage::ImageRgba8(op.apply(&other.to_rgba8())?)
        }
        other => DynamicImage::ImageRgb8(op.apply(&other.to_rgb8())?),
    };
    Some(out)
}

/// Shape of a raw interleaved sample buffer
#[derive(Debug, Clone, Copy)]
pub(crate) struct SampleLayout {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl SampleLayout {
    pub fn of<P: Pixel<Subpixel = u8>>(buf: &Image<P>) -> Self {
        let (width, height) = buf.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            channels: P::CHANNEL_COUNT as usize,
        }
    }

    /// Number of colour channels (alpha excluded)
    pub fn color_channels(&self) -> usize {
        match self.channels {
            2 | 4 => self.channels - 1,
            n => n,
        }
    }

    pub fn index(&self, x: usize, y: usize, c: usize) -> usize {
        (y * self.width + x) * self.channels + c
    }
}

/// Rebuild a buffer of the same dimensions from raw samples
pub(crate) fn rebuild<P>(like: &Image<P>, samples: Vec<u8>) -> Option<Image<P>>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = like.dimensions();
    ImageBuffer::from_raw(width, height, samples)
}

//! Detail enhancement.
//!
//! Luminance is split into a base layer, smoothed with an edge-preserving
//! recursive domain-transform filter, and a detail layer (luminance minus
//! base). The detail layer is amplified and the resulting luminance change
//! is added back to every colour channel.

use image::{DynamicImage, Pixel};
use imageproc::definitions::Image;

use super::{BufferOp, SampleLayout, apply_op, rebuild};
use crate::error::{FilterError, Result};

/// Spatial extent of the smoothing, in pixels
pub const SIGMA_SPATIAL: f32 = 12.0;
/// Range sensitivity on luminance in `[0, 1]`; smaller keeps more edges
pub const SIGMA_RANGE: f32 = 0.15;
/// Multiplier applied to the detail layer
pub const DETAIL_GAIN: f32 = 3.0;

const ITERATIONS: i32 = 3;

/// Boost fine detail using the fixed smoothing and range parameters.
pub fn enhance_details(img: &DynamicImage) -> Result<DynamicImage> {
    let op = DetailEnhance {
        sigma_spatial: SIGMA_SPATIAL,
        sigma_range: SIGMA_RANGE,
        gain: DETAIL_GAIN,
    };
    apply_op(img, &op).ok_or_else(|| FilterError::Enhance {
        reason: "output buffer does not match the input dimensions".to_string(),
    })
}

struct DetailEnhance {
    sigma_spatial: f32,
    sigma_range: f32,
    gain: f32,
}

impl BufferOp for DetailEnhance {
    fn apply<P>(&self, buf: &Image<P>) -> Option<Image<P>>
    where
        P: Pixel<Subpixel = u8>,
    {
        let layout = SampleLayout::of(buf);
        let src = buf.as_raw();

        let lum = luminance(src, &layout);
        let base = domain_transform(&lum, &layout, self.sigma_spatial, self.sigma_range);

        let mut out = src.clone();
        for y in 0..layout.height {
            for x in 0..layout.width {
                let i = y * layout.width + x;
                let enhanced = base[i] + self.gain * (lum[i] - base[i]);
                let delta = (enhanced - lum[i]) * 255.0;
                for c in 0..layout.color_channels() {
                    let idx = layout.index(x, y, c);
                    out[idx] = (f32::from(src[idx]) + delta).round().clamp(0.0, 255.0) as u8;
                }
            }
        }

        rebuild(buf, out)
    }
}

/// Per-pixel luminance in `[0, 1]` (Rec. 601 weights for colour input)
fn luminance(src: &[u8], layout: &SampleLayout) -> Vec<f32> {
    let mut lum = Vec::with_capacity(layout.width * layout.height);
    for y in 0..layout.height {
        for x in 0..layout.width {
            let value = if layout.color_channels() >= 3 {
                0.299 * f32::from(src[layout.index(x, y, 0)])
                    + 0.587 * f32::from(src[layout.index(x, y, 1)])
                    + 0.114 * f32::from(src[layout.index(x, y, 2)])
            } else {
                f32::from(src[layout.index(x, y, 0)])
            };
            lum.push(value / 255.0);
        }
    }
    lum
}

/// Recursive edge-preserving smoothing of a single channel.
///
/// Distances between neighbours grow with the luminance step between them,
/// so feedback across a strong edge is close to zero.
fn domain_transform(
    lum: &[f32],
    layout: &SampleLayout,
    sigma_spatial: f32,
    sigma_range: f32,
) -> Vec<f32> {
    let (width, height) = (layout.width, layout.height);
    let ratio = sigma_spatial / sigma_range;

    // dx[i] links pixel i to its left neighbour, dy[i] to the one above
    let mut dx = vec![1.0f32; lum.len()];
    let mut dy = vec![1.0f32; lum.len()];
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            if x > 0 {
                dx[i] = 1.0 + ratio * (lum[i] - lum[i - 1]).abs();
            }
            if y > 0 {
                dy[i] = 1.0 + ratio * (lum[i] - lum[i - width]).abs();
            }
        }
    }

    let mut out = lum.to_vec();
    let norm = (4.0f32.powi(ITERATIONS) - 1.0).sqrt();
    for iteration in 0..ITERATIONS {
        let sigma_h =
            sigma_spatial * 3.0f32.sqrt() * 2.0f32.powi(ITERATIONS - iteration - 1) / norm;
        let a = (-(2.0f32.sqrt()) / sigma_h).exp();

        // rows
        for y in 0..height {
            let row = y * width;
            for x in 1..width {
                let i = row + x;
                let v = a.powf(dx[i]);
                out[i] += v * (out[i - 1] - out[i]);
            }
            for x in (0..width.saturating_sub(1)).rev() {
                let i = row + x;
                let v = a.powf(dx[i + 1]);
                out[i] += v * (out[i + 1] - out[i]);
            }
        }

        // columns
        for x in 0..width {
            for y in 1..height {
                let i = y * width + x;
                let v = a.powf(dy[i]);
                out[i] += v * (out[i - width] - out[i]);
            }
            for y in (0..height.saturating_sub(1)).rev() {
                let i = y * width + x;
                let v = a.powf(dy[i + width]);
                out[i] += v * (out[i + width] - out[i]);
            }
        }
    }
    out
}

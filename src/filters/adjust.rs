use image::{DynamicImage, Pixel};
use imageproc::definitions::Image;
use imageproc::map::map_colors;

use super::{BufferOp, SampleLayout, apply_op, rebuild};
use crate::error::{FilterError, Result};

/// Width and height of the Gaussian kernel, independent of sigma
pub const BLUR_KERNEL_SIZE: usize = 11;

/// Shift colour channels by `offset`, saturating at 0 and 255.
///
/// Alpha is copied through untouched.
pub fn brighten(img: &DynamicImage, offset: i32) -> Result<DynamicImage> {
    apply_op(img, &Brighten { offset }).ok_or_else(|| FilterError::Brighten {
        reason: "output buffer does not match the input dimensions".to_string(),
    })
}

/// Smooth with a fixed 11x11 Gaussian whose sigma is `sigma`.
///
/// # Errors
///
/// `sigma` must be finite and positive.
pub fn blur(img: &DynamicImage, sigma: f32) -> Result<DynamicImage> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(FilterError::Blur {
            reason: format!("strength must be a positive number, got {}", sigma),
        });
    }

    let op = GaussianBlur {
        kernel: gaussian_kernel(sigma),
    };
    apply_op(img, &op).ok_or_else(|| FilterError::Blur {
        reason: "output buffer does not match the input dimensions".to_string(),
    })
}

struct Brighten {
    offset: i32,
}

impl BufferOp for Brighten {
    fn apply<P>(&self, buf: &Image<P>) -> Option<Image<P>>
    where
        P: Pixel<Subpixel = u8>,
    {
        let offset = self.offset;
        Some(map_colors(buf, |pixel: P| {
            pixel.map_with_alpha(|c| shift(c, offset), |alpha| alpha)
        }))
    }
}

fn shift(value: u8, offset: i32) -> u8 {
    (i32::from(value) + offset).clamp(0, 255) as u8
}

/// Normalised 1-D Gaussian weights, centred in the fixed kernel
pub fn gaussian_kernel(sigma: f32) -> [f32; BLUR_KERNEL_SIZE] {
    let half = (BLUR_KERNEL_SIZE / 2) as f32;
    let denom = 2.0 * sigma * sigma;

    let mut kernel = [0.0f32; BLUR_KERNEL_SIZE];
    for (i, weight) in kernel.iter_mut().enumerate() {
        let x = i as f32 - half;
        *weight = (-(x * x) / denom).exp();
    }

    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

struct GaussianBlur {
    kernel: [f32; BLUR_KERNEL_SIZE],
}

impl BufferOp for GaussianBlur {
    fn apply<P>(&self, buf: &Image<P>) -> Option<Image<P>>
    where
        P: Pixel<Subpixel = u8>,
    {
        let layout = SampleLayout::of(buf);
        let src = buf.as_raw();
        let half = (BLUR_KERNEL_SIZE / 2) as isize;

        // Separable: rows into a float scratch buffer, then columns back to u8
        let mut horizontal = vec![0.0f32; src.len()];
        for y in 0..layout.height {
            for x in 0..layout.width {
                for c in 0..layout.channels {
                    let mut acc = 0.0;
                    for (k, weight) in self.kernel.iter().enumerate() {
                        let sx = reflect_101(x as isize + k as isize - half, layout.width);
                        acc += weight * f32::from(src[layout.index(sx, y, c)]);
                    }
                    horizontal[layout.index(x, y, c)] = acc;
                }
            }
        }

        let mut out = vec![0u8; src.len()];
        for y in 0..layout.height {
            for x in 0..layout.width {
                for c in 0..layout.channels {
                    let mut acc = 0.0;
                    for (k, weight) in self.kernel.iter().enumerate() {
                        let sy = reflect_101(y as isize + k as isize - half, layout.height);
                        acc += weight * horizontal[layout.index(x, sy, c)];
                    }
                    out[layout.index(x, y, c)] = acc.round().clamp(0.0, 255.0) as u8;
                }
            }
        }

        rebuild(buf, out)
    }
}

/// Mirror an out-of-range index about the border pixel (`dcb|abcd|cba`)
fn reflect_101(mut i: isize, len: usize) -> usize {
    let len = len as isize;
    if len <= 1 {
        return 0;
    }
    loop {
        if i < 0 {
            i = -i;
        } else if i >= len {
            i = 2 * (len - 1) - i;
        } else {
            return i as usize;
        }
    }
}

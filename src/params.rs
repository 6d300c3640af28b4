use std::ops::RangeInclusive;

use crate::error::{FilterError, Result};

/// Range of the "Blurring" slider (Gaussian sigma)
pub const BLUR_RANGE: RangeInclusive<f32> = 0.5..=3.5;
pub const BLUR_STEP: f32 = 0.1;
pub const DEFAULT_BLUR: f32 = 1.0;

/// Range of the "Brightness" slider (added to every colour channel)
pub const BRIGHTNESS_RANGE: RangeInclusive<i32> = -50..=50;
pub const DEFAULT_BRIGHTNESS: i32 = 0;

/// Parameters collected from the controls for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Gaussian blur strength (sigma)
    pub blur: f32,
    /// Signed brightness offset
    pub brightness: i32,
    /// Whether the detail enhancement step runs
    pub enhance: bool,
}

impl FilterParams {
    /// Build parameters, rejecting values the controls could not produce
    pub fn new(blur: f32, brightness: i32, enhance: bool) -> Result<Self> {
        if !blur.is_finite() || !BLUR_RANGE.contains(&blur) {
            return Err(FilterError::InvalidParameter {
                name: "blur".to_string(),
                reason: format!(
                    "{} is outside {}..={}",
                    blur,
                    BLUR_RANGE.start(),
                    BLUR_RANGE.end()
                ),
            });
        }
        if !BRIGHTNESS_RANGE.contains(&brightness) {
            return Err(FilterError::InvalidParameter {
                name: "brightness".to_string(),
                reason: format!(
                    "{} is outside {}..={}",
                    brightness,
                    BRIGHTNESS_RANGE.start(),
                    BRIGHTNESS_RANGE.end()
                ),
            });
        }

        Ok(Self {
            blur,
            brightness,
            enhance,
        })
    }

    pub fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    pub fn with_brightness(mut self, brightness: i32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_enhance(mut self, enhance: bool) -> Self {
        self.enhance = enhance;
        self
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            blur: DEFAULT_BLUR,
            brightness: DEFAULT_BRIGHTNESS,
            enhance: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_controls() {
        let params = FilterParams::default();
        assert_eq!(params.blur, 1.0);
        assert_eq!(params.brightness, 0);
        assert!(!params.enhance);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(FilterParams::new(0.5, -50, false).is_ok());
        assert!(FilterParams::new(3.5, 50, true).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            FilterParams::new(0.4, 0, false),
            Err(FilterError::InvalidParameter { ref name, .. }) if name == "blur"
        ));
        assert!(FilterParams::new(f32::NAN, 0, false).is_err());
        assert!(matches!(
            FilterParams::new(1.0, 51, false),
            Err(FilterError::InvalidParameter { ref name, .. }) if name == "brightness"
        ));
    }
}

use crate::error::{SliderError, SliderResult};

/// Converts a domain value to a pixel offset from the track's left edge.
#[must_use]
pub fn to_pixel(value: f64, width: f64, max_value: f64) -> f64 {
    value * width / max_value
}

/// Converts a pixel offset back to a whole domain value.
///
/// The result is truncated toward zero. An unmeasured track (`width == 0`)
/// maps everything to 0 so callers can run through the first layout frame.
#[must_use]
pub fn to_value(pixel: f64, width: f64, max_value: f64) -> f64 {
    if width == 0.0 {
        return 0.0;
    }
    let value = (pixel * max_value / width).trunc();
    if value.is_finite() { value } else { 0.0 }
}

/// Linear map between `[0, max_value]` and the pixel width of a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    max_value: f64,
}

impl ValueScale {
    pub fn new(max_value: f64) -> SliderResult<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(SliderError::InvalidConfig(
                "max_value must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { max_value })
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64, width: f64) -> f64 {
        to_pixel(value, width, self.max_value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64, width: f64) -> f64 {
        to_value(pixel, width, self.max_value)
    }
}

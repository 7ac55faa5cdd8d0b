use crate::core::ValueRange;
use crate::error::{SliderError, SliderResult};

use super::RangeSliderConfig;

pub(super) fn validate_config(config: RangeSliderConfig) -> SliderResult<RangeSliderConfig> {
    if !config.max_value.is_finite() || config.max_value <= 0.0 {
        return Err(SliderError::InvalidConfig(
            "max_value must be finite and > 0".to_owned(),
        ));
    }
    if config.step == 0 {
        return Err(SliderError::InvalidConfig("step must be > 0".to_owned()));
    }
    if !config.handle_width_px.is_finite() || config.handle_width_px <= 0.0 {
        return Err(SliderError::InvalidConfig(
            "handle_width_px must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

/// Checks the preconditions the interaction paths assume of a range list.
///
/// Drag handling never calls this; hosts may run it on their initial list.
pub fn validate_ranges(values: &[ValueRange], max_value: f64) -> SliderResult<()> {
    for (index, range) in values.iter().enumerate() {
        if !range.start.is_finite() || !range.end.is_finite() {
            return Err(SliderError::InvalidRanges(format!(
                "range {index} must have finite endpoints"
            )));
        }
        if range.start < 0.0 || range.end > max_value {
            return Err(SliderError::InvalidRanges(format!(
                "range {index} ({}, {}) must lie within [0, {max_value}]",
                range.start, range.end
            )));
        }
        if range.start > range.end {
            return Err(SliderError::InvalidRanges(format!(
                "range {index} start {} is after its end {}",
                range.start, range.end
            )));
        }
    }

    if let Some(index) = values
        .windows(2)
        .position(|pair| pair[0].end > pair[1].start)
    {
        return Err(SliderError::InvalidRanges(format!(
            "range {index} overlaps range {}",
            index + 1
        )));
    }

    Ok(())
}

use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

use super::validation::validate_config;

/// Public slider bootstrap configuration.
///
/// Serializable so host applications can load slider setup from JSON
/// instead of inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSliderConfig {
    /// Domain value represented by the full track width.
    pub max_value: f64,
    /// Quantization granularity for committed values.
    #[serde(default = "default_step")]
    pub step: u32,
    /// Width of each handle's hit area, centred on the range edge.
    #[serde(default = "default_handle_width_px")]
    pub handle_width_px: f64,
    /// Draws `HH:MM` labels above each range.
    #[serde(default)]
    pub show_labels: bool,
}

impl RangeSliderConfig {
    #[must_use]
    pub fn new(max_value: f64) -> Self {
        Self {
            max_value,
            step: default_step(),
            handle_width_px: default_handle_width_px(),
            show_labels: false,
        }
    }

    #[must_use]
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_handle_width_px(mut self, handle_width_px: f64) -> Self {
        self.handle_width_px = handle_width_px;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    pub fn validate(self) -> SliderResult<Self> {
        validate_config(self)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|err| {
            SliderError::InvalidConfig(format!("failed to parse slider config json: {err}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> SliderResult<String> {
        serde_json::to_string_pretty(&self).map_err(|err| {
            SliderError::Serialization(format!("failed to serialize slider config: {err}"))
        })
    }
}

fn default_step() -> u32 {
    1
}

fn default_handle_width_px() -> f64 {
    12.0
}

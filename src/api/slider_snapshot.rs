use serde::{Deserialize, Serialize};

use crate::core::{SliderId, TrackBounds, ValueRange, format_range_labels};
use crate::error::{SliderError, SliderResult};
use crate::interaction::DragPhase;

use super::{RangeSlider, RangeSliderConfig};

/// Serializable diagnostics view of one slider and the values it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub id: SliderId,
    pub config: RangeSliderConfig,
    pub track: TrackBounds,
    pub values: Vec<ValueRange>,
    pub pixel_rows: Vec<(f64, f64)>,
    pub labels: Vec<String>,
    pub drag: DragPhase,
}

impl RangeSlider {
    #[must_use]
    pub fn snapshot(&self, values: &[ValueRange], drag: DragPhase) -> SliderSnapshot {
        SliderSnapshot {
            id: self.id(),
            config: self.config(),
            track: self.track_bounds(),
            values: values.to_vec(),
            pixel_rows: self
                .rows(values)
                .into_iter()
                .map(|row| (row.left, row.right()))
                .collect(),
            labels: format_range_labels(values),
            drag,
        }
    }

    pub fn snapshot_json_pretty(
        &self,
        values: &[ValueRange],
        drag: DragPhase,
    ) -> SliderResult<String> {
        serde_json::to_string_pretty(&self.snapshot(values, drag)).map_err(|err| {
            SliderError::Serialization(format!("failed to serialize slider snapshot: {err}"))
        })
    }
}

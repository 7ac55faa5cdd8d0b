use tracing::{debug, trace};

use crate::core::{SliderId, TrackBounds, ValueRange, ValueScale};
use crate::error::SliderResult;
use crate::interaction::{HandleDrag, HandleEdge, HandleTarget};

use super::range_row::hit_test_rows;
use super::{
    LayoutChange, LayoutObserver, RangeList, RangeRow, RangeSliderConfig, SteppedController,
};

/// One multi-range track.
///
/// The slider owns its configuration and the last measured track bounds but
/// never the range list: every call borrows the caller's current values and
/// reports changes through a setter receiving the full replacement list.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    id: SliderId,
    config: RangeSliderConfig,
    scale: ValueScale,
    stepped: SteppedController,
    bounds: TrackBounds,
}

impl RangeSlider {
    pub fn new(id: SliderId, config: RangeSliderConfig) -> SliderResult<Self> {
        let config = config.validate()?;
        let scale = ValueScale::new(config.max_value)?;
        debug!(
            slider = id.raw(),
            max_value = config.max_value,
            step = config.step,
            "range slider created"
        );
        Ok(Self {
            id,
            config,
            scale,
            stepped: SteppedController::new(config.step, config.max_value),
            bounds: TrackBounds::default(),
        })
    }

    #[must_use]
    pub fn id(&self) -> SliderId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> RangeSliderConfig {
        self.config
    }

    #[must_use]
    pub fn scale(&self) -> ValueScale {
        self.scale
    }

    #[must_use]
    pub fn track_bounds(&self) -> TrackBounds {
        self.bounds
    }

    /// Measured track width, 0 until the host reports a layout.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.measured_width()
    }

    #[must_use]
    pub fn range_list<'a>(&self, values: &'a [ValueRange]) -> RangeList<'a> {
        RangeList::new(values, self.scale, self.width())
    }

    #[must_use]
    pub fn rows(&self, values: &[ValueRange]) -> Vec<RangeRow> {
        RangeRow::layout_all(&self.range_list(values), self.config.handle_width_px)
    }

    /// Finds the handle under a client-space pointer position.
    #[must_use]
    pub fn hit_test_handle(&self, values: &[ValueRange], x: f64, y: f64) -> Option<HandleTarget> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let local_x = x - self.bounds.left;
        hit_test_rows(&self.rows(values), local_x)
            .map(|(row, edge)| HandleTarget::new(self.id, row, edge))
    }

    /// Moves the start of row `index` to a raw track-local pixel position.
    ///
    /// Returns the emitted list length, or `None` when nothing was emitted
    /// (unknown row or unmeasured track).
    pub fn set_start_px(
        &self,
        values: &[ValueRange],
        index: usize,
        pixel: f64,
        set_values: impl FnMut(Vec<ValueRange>),
    ) -> Option<usize> {
        self.forward(values, index, HandleEdge::Start, pixel, set_values)
    }

    /// Moves the end of row `index` to a raw track-local pixel position.
    pub fn set_end_px(
        &self,
        values: &[ValueRange],
        index: usize,
        pixel: f64,
        set_values: impl FnMut(Vec<ValueRange>),
    ) -> Option<usize> {
        self.forward(values, index, HandleEdge::End, pixel, set_values)
    }

    /// Applies a drag produced by an interaction session for this slider.
    pub fn apply_drag(
        &self,
        drag: HandleDrag,
        values: &[ValueRange],
        set_values: impl FnMut(Vec<ValueRange>),
    ) -> Option<usize> {
        if drag.handle.slider != self.id {
            return None;
        }
        self.forward(values, drag.handle.row, drag.handle.edge, drag.pixel, set_values)
    }

    fn forward(
        &self,
        values: &[ValueRange],
        index: usize,
        edge: HandleEdge,
        pixel: f64,
        set_values: impl FnMut(Vec<ValueRange>),
    ) -> Option<usize> {
        let list = self.range_list(values);
        let row = RangeRow::layout(&list, index, self.config.handle_width_px)?;
        let Some(aligned) = row.forward(&list, edge, pixel) else {
            trace!(
                slider = self.id.raw(),
                index,
                width = list.width(),
                "drag ignored"
            );
            return None;
        };
        Some(self.stepped.commit(&aligned, set_values))
    }

    /// Quantizes and merges a list without any drag, e.g. for an initial load.
    pub fn normalize(
        &self,
        values: &[ValueRange],
        set_values: impl FnMut(Vec<ValueRange>),
    ) -> usize {
        self.stepped.commit(values, set_values)
    }
}

impl LayoutObserver for RangeSlider {
    fn on_track_layout(&mut self, bounds: TrackBounds) -> LayoutChange {
        let change = LayoutChange::classify(self.bounds, bounds);
        if change != LayoutChange::Unchanged {
            debug!(
                slider = self.id.raw(),
                left = bounds.left,
                width = bounds.width,
                change = ?change,
                "track layout"
            );
        }
        self.bounds = bounds;
        change
    }
}

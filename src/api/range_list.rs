use tracing::trace;

use crate::core::{ValueRange, ValueScale};

/// Alignment layer over a caller-owned range list.
///
/// Turns raw pixel positions into domain values while keeping every range
/// between its neighbours. It borrows the list for one operation and never
/// keeps a copy.
#[derive(Debug, Clone, Copy)]
pub struct RangeList<'a> {
    values: &'a [ValueRange],
    scale: ValueScale,
    width: f64,
}

impl<'a> RangeList<'a> {
    #[must_use]
    pub fn new(values: &'a [ValueRange], scale: ValueScale, width: f64) -> Self {
        Self {
            values,
            scale,
            width,
        }
    }

    #[must_use]
    pub fn values(&self) -> &'a [ValueRange] {
        self.values
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }

    fn px(&self, value: f64) -> f64 {
        self.scale.value_to_pixel(value, self.width)
    }

    /// Pixel bounds `(left, right)` of one range on the current track.
    #[must_use]
    pub fn range_pixels(&self, index: usize) -> Option<(f64, f64)> {
        let range = self.values.get(index)?;
        Some((self.px(range.start), self.px(range.end)))
    }

    /// Clamps a start candidate between the previous end and this range's end.
    ///
    /// `lower > upper` (a list that already overlaps) resolves to `upper`
    /// instead of panicking.
    #[must_use]
    pub fn align_start(&self, candidate_px: f64, index: usize) -> Option<f64> {
        let range = self.values.get(index)?;
        let prev_end = index
            .checked_sub(1)
            .and_then(|prev| self.values.get(prev))
            .map_or(0.0, |prev| prev.end);

        let prev_px = self.px(prev_end);
        let end_px = self.px(range.end);
        let clamped = end_px.min(candidate_px.max(prev_px));
        let value = self.scale.pixel_to_value(clamped, self.width);
        // Truncation on the way back can land one unit past a neighbour.
        Some(range.end.min(value.max(prev_end)))
    }

    /// Clamps an end candidate between this range's start and the next start.
    ///
    /// Without a successor the upper bound is `max_value`.
    #[must_use]
    pub fn align_end(&self, candidate_px: f64, index: usize) -> Option<f64> {
        let range = self.values.get(index)?;
        let next_start = self
            .values
            .get(index + 1)
            .map_or(self.scale.max_value(), |next| next.start);

        let start_px = self.px(range.start);
        let next_px = self.px(next_start);
        let clamped = start_px.max(candidate_px.min(next_px));
        let value = self.scale.pixel_to_value(clamped, self.width);
        Some(range.start.max(value.min(next_start)))
    }

    /// Full list with the start of `index` moved to the aligned candidate.
    ///
    /// Returns `None` for an unknown row or while the track is unmeasured.
    #[must_use]
    pub fn set_start_px(&self, candidate_px: f64, index: usize) -> Option<Vec<ValueRange>> {
        if !self.is_measured() || !candidate_px.is_finite() {
            return None;
        }
        let start = self.align_start(candidate_px, index)?;
        trace!(index, candidate_px, start, "align start");
        Some(self.replace(index, |range| range.with_start(start)))
    }

    /// Full list with the end of `index` moved to the aligned candidate.
    #[must_use]
    pub fn set_end_px(&self, candidate_px: f64, index: usize) -> Option<Vec<ValueRange>> {
        if !self.is_measured() || !candidate_px.is_finite() {
            return None;
        }
        let end = self.align_end(candidate_px, index)?;
        trace!(index, candidate_px, end, "align end");
        Some(self.replace(index, |range| range.with_end(end)))
    }

    fn replace(&self, index: usize, update: impl Fn(ValueRange) -> ValueRange) -> Vec<ValueRange> {
        self.values
            .iter()
            .enumerate()
            .map(|(position, range)| {
                if position == index {
                    update(*range)
                } else {
                    *range
                }
            })
            .collect()
    }
}

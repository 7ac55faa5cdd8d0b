use smallvec::SmallVec;

use crate::core::types::ValueRange;

/// Rounds `value` to the nearest multiple of `step`.
///
/// A zero step leaves the value untouched.
#[must_use]
pub fn quantize_value(value: f64, step: u32) -> f64 {
    if step == 0 {
        return value;
    }
    let step = f64::from(step);
    (value / step).round() * step
}

/// Nearest multiple of `step` that does not exceed `max_value`.
///
/// Only differs from [`quantize_value`] when `max_value` is not itself a
/// multiple of `step` and rounding would overshoot it; the next lower multiple
/// is used instead. Monotonic, so quantizing a sorted list keeps it sorted.
#[must_use]
pub fn quantize_value_bounded(value: f64, step: u32, max_value: f64) -> f64 {
    let quantized = quantize_value(value, step);
    if quantized > max_value && step > 0 {
        quantized - f64::from(step)
    } else {
        quantized
    }
}

/// Quantizes both endpoints of every range independently.
#[must_use]
pub fn quantize_ranges(values: &[ValueRange], step: u32, max_value: f64) -> Vec<ValueRange> {
    values
        .iter()
        .map(|range| {
            ValueRange::new(
                quantize_value_bounded(range.start, step, max_value),
                quantize_value_bounded(range.end, step, max_value),
            )
        })
        .collect()
}

/// Collapses consecutive ranges where one starts exactly where the previous ends.
///
/// Chains collapse as well: `[(0,1),(1,2),(2,3)]` becomes `[(0,3)]`.
#[must_use]
pub fn merge_contiguous(values: Vec<ValueRange>) -> Vec<ValueRange> {
    let mut merged: Vec<ValueRange> = Vec::with_capacity(values.len());
    for current in values {
        match merged.last_mut() {
            Some(previous) if previous.end == current.start => previous.end = current.end,
            _ => merged.push(current),
        }
    }
    merged
}

/// Quantizes to `step` and merges the ranges that became contiguous.
#[must_use]
pub fn normalize_to_step(values: &[ValueRange], step: u32, max_value: f64) -> Vec<ValueRange> {
    merge_contiguous(quantize_ranges(values, step, max_value))
}

/// Indexes `i` where `values[i].end == values[i + 1].start`.
///
/// Used by diagnostics to report which rows a normalization pass will fold.
#[must_use]
pub fn contiguous_pairs(values: &[ValueRange]) -> SmallVec<[usize; 4]> {
    values
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].end == pair[1].start)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_rounds_half_up_for_positive_values() {
        assert_eq!(quantize_value(45.0, 30), 60.0);
        assert_eq!(quantize_value(44.0, 30), 30.0);
    }

    #[test]
    fn bounded_quantize_stays_below_max() {
        assert_eq!(quantize_value(1440.0, 7), 1442.0);
        assert_eq!(quantize_value_bounded(1440.0, 7, 1440.0), 1435.0);
        assert_eq!(quantize_value_bounded(1440.0, 30, 1440.0), 1440.0);
    }

    #[test]
    fn merge_keeps_gaps() {
        let values = vec![ValueRange::new(0.0, 10.0), ValueRange::new(11.0, 20.0)];
        assert_eq!(merge_contiguous(values.clone()), values);
    }

    #[test]
    fn contiguous_pairs_lists_left_indexes() {
        let values = [
            ValueRange::new(0.0, 10.0),
            ValueRange::new(10.0, 20.0),
            ValueRange::new(25.0, 30.0),
            ValueRange::new(30.0, 40.0),
        ];
        assert_eq!(contiguous_pairs(&values).as_slice(), &[0, 2]);
    }
}

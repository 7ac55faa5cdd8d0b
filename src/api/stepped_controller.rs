use tracing::debug;

use crate::core::{ValueRange, contiguous_pairs, merge_contiguous, quantize_ranges};

/// Wraps the caller's setter with step quantization and contiguous-range merging.
///
/// This is the only layer that can change the list length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteppedController {
    step: u32,
    max_value: f64,
}

impl SteppedController {
    /// `step == 0` is treated as 1.
    #[must_use]
    pub fn new(step: u32, max_value: f64) -> Self {
        Self {
            step: step.max(1),
            max_value,
        }
    }

    #[must_use]
    pub fn step(self) -> u32 {
        self.step
    }

    /// Quantizes and merges without emitting.
    #[must_use]
    pub fn normalize(self, values: &[ValueRange]) -> Vec<ValueRange> {
        merge_contiguous(quantize_ranges(values, self.step, self.max_value))
    }

    /// Normalizes `values` and hands the result to `set_values`.
    ///
    /// Returns the emitted list length.
    pub fn commit(
        self,
        values: &[ValueRange],
        mut set_values: impl FnMut(Vec<ValueRange>),
    ) -> usize {
        let quantized = quantize_ranges(values, self.step, self.max_value);
        let folded = contiguous_pairs(&quantized);
        if !folded.is_empty() {
            debug!(
                step = self.step,
                pairs = ?folded.as_slice(),
                "merging contiguous ranges"
            );
        }
        let normalized = merge_contiguous(quantized);
        let len = normalized.len();
        set_values(normalized);
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_step_behaves_like_one() {
        assert_eq!(SteppedController::new(0, 100.0).step(), 1);
    }

    #[test]
    fn commit_reports_emitted_length() {
        let controller = SteppedController::new(30, 1440.0);
        let mut emitted = Vec::new();
        let len = controller.commit(
            &[ValueRange::new(60.0, 350.0), ValueRange::new(365.0, 510.0)],
            |next| emitted = next,
        );
        assert_eq!(len, 1);
        assert_eq!(emitted, vec![ValueRange::new(60.0, 510.0)]);
    }
}

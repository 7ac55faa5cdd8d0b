use serde::{Deserialize, Serialize};

use crate::core::TrackBounds;

/// Outcome of one measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutChange {
    /// Bounds are identical to the previous pass.
    Unchanged,
    /// Only the track position moved; pixel positions of ranges are unchanged.
    Moved,
    /// The width changed; the host should re-render so range pixels recompute.
    Resized,
}

impl LayoutChange {
    #[must_use]
    pub fn needs_render(self) -> bool {
        matches!(self, Self::Resized)
    }

    #[must_use]
    pub fn classify(previous: TrackBounds, next: TrackBounds) -> Self {
        if previous == next {
            Self::Unchanged
        } else if previous.measured_width() == next.measured_width() {
            Self::Moved
        } else {
            Self::Resized
        }
    }
}

/// Receives track measurements from the host whenever the rendered track
/// changes size or position.
pub trait LayoutObserver {
    fn on_track_layout(&mut self, bounds: TrackBounds) -> LayoutChange;
}

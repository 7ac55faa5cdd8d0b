use serde::{Deserialize, Serialize};

/// One selected interval on the track, in domain units.
///
/// `start <= end` is expected for every range handed to the slider; the
/// interaction paths preserve it but never repair a list that breaks it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub start: f64,
    pub end: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn with_start(self, start: f64) -> Self {
        Self { start, ..self }
    }

    #[must_use]
    pub fn with_end(self, end: f64) -> Self {
        Self { end, ..self }
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl From<ValueRange> for (f64, f64) {
    fn from(range: ValueRange) -> Self {
        (range.start, range.end)
    }
}

/// Host window size in pixels, used to detect a pointer leaving the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns `true` when a client coordinate sits on or past the window edge.
    #[must_use]
    pub fn is_outside(self, x: f64, y: f64) -> bool {
        x <= 0.0 || x >= f64::from(self.width) || y <= 0.0 || y >= f64::from(self.height)
    }
}

/// Measured client-space box of a rendered track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TrackBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TrackBounds {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Width usable for value mapping; non-finite or negative widths count as unmeasured.
    #[must_use]
    pub fn measured_width(self) -> f64 {
        if self.width.is_finite() && self.width > 0.0 {
            self.width
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }
}

/// Stable identifier of one slider registered with an input dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SliderId(u32);

impl SliderId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

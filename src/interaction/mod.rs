use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{SliderId, Viewport};

/// Which endpoint of a range a handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleEdge {
    Start,
    End,
}

/// Identity of one handle: slider, row index and edge.
///
/// Rows are keyed by their index in the caller's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleTarget {
    pub slider: SliderId,
    pub row: usize,
    pub edge: HandleEdge,
}

impl HandleTarget {
    #[must_use]
    pub const fn new(slider: SliderId, row: usize, edge: HandleEdge) -> Self {
        Self { slider, row, edge }
    }
}

/// Public view of the drag lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging { handle: HandleTarget, origin_x: f64 },
}

/// Raw pixel position produced by one pointer move during a drag.
///
/// `pixel` is relative to the left edge of the track the drag started in and
/// is neither clamped nor snapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleDrag {
    pub handle: HandleTarget,
    pub pixel: f64,
}

/// Single-pointer drag session.
///
/// The handle and the track origin are recorded by two separate
/// observations (handle press, track press) that may arrive in either order;
/// moves are only attributed once both are known.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionSession {
    active_handle: Option<HandleTarget>,
    origin_x: Option<f64>,
}

impl InteractionSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match (self.active_handle, self.origin_x) {
            (Some(handle), Some(origin_x)) => DragPhase::Dragging { handle, origin_x },
            _ => DragPhase::Idle,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase(), DragPhase::Dragging { .. })
    }

    #[must_use]
    pub fn active_handle(&self) -> Option<HandleTarget> {
        self.active_handle
    }

    #[must_use]
    pub fn origin_x(&self) -> Option<f64> {
        self.origin_x
    }

    /// Records the client-space left edge of the track under the pointer.
    pub fn begin_track_drag(&mut self, track_left_x: f64) {
        if !track_left_x.is_finite() {
            return;
        }
        trace!(track_left_x, "track press");
        self.origin_x = Some(track_left_x);
    }

    /// Records the handle under the pointer.
    pub fn begin_handle_drag(&mut self, handle: HandleTarget) {
        debug!(
            slider = handle.slider.raw(),
            row = handle.row,
            edge = ?handle.edge,
            "handle grabbed"
        );
        self.active_handle = Some(handle);
    }

    pub fn end_drag(&mut self) {
        if self.active_handle.is_some() {
            debug!("drag session ended");
        }
        self.active_handle = None;
        self.origin_x = None;
    }

    /// Attributes a pointer move to the active handle.
    ///
    /// Returns `None` unless both a handle and an origin are recorded.
    #[must_use]
    pub fn on_move(&self, pointer_x: f64) -> Option<HandleDrag> {
        let handle = self.active_handle?;
        let origin_x = self.origin_x?;
        if !pointer_x.is_finite() {
            return None;
        }
        Some(HandleDrag {
            handle,
            pixel: pointer_x - origin_x,
        })
    }

    /// Move handling with implicit drag-end when the pointer leaves the window.
    ///
    /// A pointer-up outside the window is never observed, so an exit is
    /// treated as the end of the gesture and the move itself is dropped.
    pub fn on_move_within(&mut self, x: f64, y: f64, viewport: Viewport) -> Option<HandleDrag> {
        if viewport.is_outside(x, y) {
            if self.active_handle.is_some() {
                debug!(x, y, "pointer left viewport during drag");
            }
            self.end_drag();
            return None;
        }
        self.on_move(x)
    }

    /// Unmount hook for a row: drops the session only if it targets that row.
    pub fn release_row(&mut self, slider: SliderId, row: usize) {
        if let Some(handle) = self.active_handle
            && handle.slider == slider
            && handle.row == row
        {
            debug!(slider = slider.raw(), row, "active row unmounted");
            self.active_handle = None;
        }
    }

    /// Drops the session if it targets any handle of `slider`.
    pub fn release_slider(&mut self, slider: SliderId) {
        if self
            .active_handle
            .is_some_and(|handle| handle.slider == slider)
        {
            self.end_drag();
        }
    }
}

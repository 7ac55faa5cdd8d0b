use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{SliderId, TrackBounds, ValueRange, Viewport};
use crate::error::{SliderError, SliderResult};
use crate::interaction::{DragPhase, HandleDrag, InteractionSession};

use super::{LayoutChange, LayoutObserver, RangeSlider};

/// One touch contact in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer and touch input as delivered by the host, in client coordinates.
///
/// Only the first touch contact is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerInput {
    MouseDown { x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
    MouseUp,
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd,
}

/// Single top-level input dispatcher for any number of sliders.
///
/// Owns the one drag session, the window size used for exit detection and an
/// ordered registry of sliders. Registration order doubles as press priority
/// when tracks overlap.
#[derive(Debug, Default)]
pub struct InputDispatcher {
    sliders: IndexMap<SliderId, RangeSlider>,
    session: InteractionSession,
    viewport: Option<Viewport>,
}

impl InputDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a slider with a unique identifier.
    pub fn register_slider(&mut self, slider: RangeSlider) -> SliderResult<()> {
        let id = slider.id();
        if self.sliders.contains_key(&id) {
            return Err(SliderError::InvalidConfig(format!(
                "slider with id `{}` is already registered",
                id.raw()
            )));
        }
        debug!(slider = id.raw(), "slider registered");
        self.sliders.insert(id, slider);
        Ok(())
    }

    /// Removes a slider, ending a drag that targets it.
    pub fn unregister_slider(&mut self, id: SliderId) -> Option<RangeSlider> {
        self.session.release_slider(id);
        self.sliders.shift_remove(&id)
    }

    #[must_use]
    pub fn slider(&self, id: SliderId) -> Option<&RangeSlider> {
        self.sliders.get(&id)
    }

    #[must_use]
    pub fn slider_count(&self) -> usize {
        self.sliders.len()
    }

    pub fn sliders(&self) -> impl Iterator<Item = &RangeSlider> {
        self.sliders.values()
    }

    #[must_use]
    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Sets the host window size; invalid sizes disable exit detection.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport.is_valid().then_some(viewport);
    }

    /// Forwards a track measurement to the registered slider.
    pub fn on_track_layout(
        &mut self,
        id: SliderId,
        bounds: TrackBounds,
    ) -> SliderResult<LayoutChange> {
        let slider = self
            .sliders
            .get_mut(&id)
            .ok_or(SliderError::UnknownSlider(id.raw()))?;
        Ok(slider.on_track_layout(bounds))
    }

    /// Feeds one input event through the session.
    ///
    /// `values` resolves the caller-owned list of a slider; it is only read
    /// on presses, to locate the handle under the pointer. Returns the raw
    /// drag to commit with [`InputDispatcher::commit_drag`], if any.
    pub fn dispatch<'v>(
        &mut self,
        input: &PointerInput,
        values: impl Fn(SliderId) -> &'v [ValueRange],
    ) -> Option<HandleDrag> {
        match input {
            PointerInput::MouseDown { x, y } => {
                self.pointer_down(*x, *y, values);
                None
            }
            PointerInput::TouchStart { touches } => {
                let first = touches.first()?;
                self.pointer_down(first.x, first.y, values);
                None
            }
            PointerInput::MouseMove { x, y } => self.pointer_move(*x, *y),
            PointerInput::TouchMove { touches } => {
                let first = touches.first()?;
                self.pointer_move(first.x, first.y)
            }
            PointerInput::MouseUp | PointerInput::TouchEnd => {
                self.session.end_drag();
                None
            }
        }
    }

    fn pointer_down<'v>(
        &mut self,
        x: f64,
        y: f64,
        values: impl Fn(SliderId) -> &'v [ValueRange],
    ) {
        let Some(slider) = self
            .sliders
            .values()
            .find(|slider| slider.track_bounds().contains(x, y))
        else {
            trace!(x, y, "press outside every track");
            return;
        };

        if let Some(handle) = slider.hit_test_handle(values(slider.id()), x, y) {
            self.session.begin_handle_drag(handle);
        }
        self.session.begin_track_drag(slider.track_bounds().left);
    }

    fn pointer_move(&mut self, x: f64, y: f64) -> Option<HandleDrag> {
        match self.viewport {
            Some(viewport) => self.session.on_move_within(x, y, viewport),
            None => self.session.on_move(x),
        }
    }

    /// Commits a drag against the caller's current list of its slider.
    ///
    /// Returns the emitted list length. When the commit merged ranges, rows
    /// past the new length unmount and the drag ends: handles are keyed by
    /// row index, so after a merge the grabbed handle no longer names the
    /// edge the user picked up.
    pub fn commit_drag(
        &mut self,
        drag: HandleDrag,
        values: &[ValueRange],
        set_values: impl FnMut(Vec<ValueRange>),
    ) -> Option<usize> {
        let id = drag.handle.slider;
        let Some(slider) = self.sliders.get(&id) else {
            warn!(slider = id.raw(), "drag for unregistered slider dropped");
            return None;
        };

        let previous_len = values.len();
        let emitted = slider.apply_drag(drag, values, set_values)?;
        if emitted < previous_len {
            for row in emitted..previous_len {
                self.session.release_row(id, row);
            }
            self.session.release_slider(id);
        }
        Some(emitted)
    }
}

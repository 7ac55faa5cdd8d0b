//! range-slider-rs: headless multi-range slider.
//!
//! Keeps a caller-owned list of `[start, end]` ranges in sync with drag
//! gestures on a horizontal track: raw pointer positions are clamped against
//! neighbouring ranges, snapped to a step, and ranges that end up touching
//! are merged. Drawing is left to any [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{InputDispatcher, RangeSlider, RangeSliderConfig};
pub use crate::core::{SliderId, ValueRange};
pub use error::{SliderError, SliderResult};

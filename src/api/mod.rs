mod input_dispatcher;
mod layout_observer;
mod range_list;
mod range_row;
mod render_frame_builder;
mod slider;
mod slider_config;
mod slider_snapshot;
mod stepped_controller;
mod validation;

pub use input_dispatcher::{InputDispatcher, PointerInput, TouchPoint};
pub use layout_observer::{LayoutChange, LayoutObserver};
pub use range_list::RangeList;
pub use range_row::{RangeRow, hit_test_rows};
pub use render_frame_builder::SliderStyle;
pub use slider::RangeSlider;
pub use slider_config::RangeSliderConfig;
pub use slider_snapshot::SliderSnapshot;
pub use stepped_controller::SteppedController;
pub use validation::validate_ranges;

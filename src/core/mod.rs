pub mod scale;
pub mod steps;
pub mod time_format;
pub mod types;

pub use scale::{ValueScale, to_pixel, to_value};
pub use steps::{
    contiguous_pairs, merge_contiguous, normalize_to_step, quantize_ranges, quantize_value,
    quantize_value_bounded,
};
pub use time_format::{format_minutes, format_range_labels};
pub use types::{SliderId, TrackBounds, ValueRange, Viewport};

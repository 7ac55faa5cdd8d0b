use chrono::NaiveTime;

use crate::core::types::ValueRange;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Formats minutes since midnight as zero-padded `HH:MM`.
///
/// `1440` renders as `24:00` so a range can close at end of day. Values are
/// truncated to whole minutes; anything outside `[0, 1440]` is clamped.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    let minutes = if minutes.is_finite() {
        (minutes.trunc() as i64).clamp(0, MINUTES_PER_DAY)
    } else {
        0
    };
    if minutes == MINUTES_PER_DAY {
        return "24:00".to_owned();
    }

    // `minutes` is in [0, 1440) here, so the conversion cannot fail.
    NaiveTime::from_num_seconds_from_midnight_opt((minutes * 60) as u32, 0)
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| "00:00".to_owned())
}

/// One `HH:MM - HH:MM` line per range, in track order.
#[must_use]
pub fn format_range_labels(values: &[ValueRange]) -> Vec<String> {
    values
        .iter()
        .map(|range| format!("{} - {}", format_minutes(range.start), format_minutes(range.end)))
        .collect()
}

use range_slider::core::{ValueRange, format_minutes, format_range_labels};

#[test]
fn formats_minutes_since_midnight_as_hh_mm() {
    assert_eq!(format_minutes(0.0), "00:00");
    assert_eq!(format_minutes(90.0), "01:30");
    assert_eq!(format_minutes(605.0), "10:05");
    assert_eq!(format_minutes(1439.0), "23:59");
}

#[test]
fn end_of_day_renders_as_24_00() {
    assert_eq!(format_minutes(1440.0), "24:00");
}

#[test]
fn out_of_range_minutes_are_clamped() {
    assert_eq!(format_minutes(-30.0), "00:00");
    assert_eq!(format_minutes(2000.0), "24:00");
    assert_eq!(format_minutes(f64::NAN), "00:00");
}

#[test]
fn range_labels_follow_track_order() {
    let values = [ValueRange::new(60.0, 300.0), ValueRange::new(360.0, 510.0)];
    assert_eq!(
        format_range_labels(&values),
        vec!["01:00 - 05:00".to_owned(), "06:00 - 08:30".to_owned()]
    );
}

use range_slider::core::{ValueScale, to_pixel, to_value};

#[test]
fn value_maps_linearly_onto_track_width() {
    assert_eq!(to_pixel(720.0, 500.0, 1440.0), 250.0);
    assert_eq!(to_pixel(0.0, 500.0, 1440.0), 0.0);
    assert_eq!(to_pixel(1440.0, 500.0, 1440.0), 500.0);
}

#[test]
fn pixel_maps_back_with_truncation() {
    // 104 px * 1440 / 500 = 299.52
    assert_eq!(to_value(104.0, 500.0, 1440.0), 299.0);
    assert_eq!(to_value(125.0, 500.0, 1440.0), 360.0);
}

#[test]
fn unmeasured_track_maps_every_pixel_to_zero() {
    assert_eq!(to_value(250.0, 0.0, 1440.0), 0.0);
    assert_eq!(to_pixel(720.0, 0.0, 1440.0), 0.0);
}

#[test]
fn round_trip_is_exact_when_width_is_a_multiple_of_max_value() {
    let max_value = 1440.0;
    for factor in [1.0, 2.0, 3.0] {
        let width = max_value * factor;
        for value in 0..=1440 {
            let value = f64::from(value);
            let px = to_pixel(value, width, max_value);
            assert_eq!(to_value(px, width, max_value), value);
        }
    }
}

#[test]
fn value_scale_rejects_non_positive_max() {
    assert!(ValueScale::new(0.0).is_err());
    assert!(ValueScale::new(-10.0).is_err());
    assert!(ValueScale::new(f64::NAN).is_err());

    let scale = ValueScale::new(1440.0).expect("valid scale");
    assert_eq!(scale.max_value(), 1440.0);
    assert_eq!(scale.value_to_pixel(360.0, 500.0), 125.0);
    assert_eq!(scale.pixel_to_value(125.0, 500.0), 360.0);
}

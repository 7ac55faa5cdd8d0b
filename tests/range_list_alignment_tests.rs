use range_slider::api::{LayoutObserver, RangeList, RangeSlider, RangeSliderConfig};
use range_slider::core::{SliderId, TrackBounds, ValueRange, ValueScale};

fn demo_values() -> Vec<ValueRange> {
    vec![ValueRange::new(60.0, 300.0), ValueRange::new(360.0, 510.0)]
}

fn scale() -> ValueScale {
    ValueScale::new(1440.0).expect("valid scale")
}

fn measured_slider(step: u32, width: f64) -> RangeSlider {
    let config = RangeSliderConfig::new(1440.0).with_step(step);
    let mut slider = RangeSlider::new(SliderId::new(1), config).expect("slider init");
    slider.on_track_layout(TrackBounds::new(100.0, 40.0, width, 24.0));
    slider
}

#[test]
fn end_handle_cannot_cross_next_range_start() {
    let values = demo_values();
    let list = RangeList::new(&values, scale(), 500.0);
    let candidate_px = 400.0 * 500.0 / 1440.0;

    let end = list.align_end(candidate_px, 0).expect("row exists");
    assert!(end <= 360.0);
    assert_eq!(end, 360.0);
}

#[test]
fn start_handle_cannot_cross_previous_range_end() {
    let values = demo_values();
    let list = RangeList::new(&values, scale(), 1440.0);

    assert_eq!(list.align_start(100.0, 1), Some(300.0));
    assert_eq!(list.align_start(400.0, 1), Some(400.0));
    assert_eq!(list.align_start(900.0, 1), Some(510.0));
}

#[test]
fn first_and_last_rows_are_bounded_by_the_track() {
    let values = demo_values();
    let list = RangeList::new(&values, scale(), 1440.0);

    assert_eq!(list.align_start(-50.0, 0), Some(0.0));
    assert_eq!(list.align_end(5000.0, 1), Some(1440.0));
}

#[test]
fn overlapping_input_degrades_without_panicking() {
    let values = vec![ValueRange::new(0.0, 200.0), ValueRange::new(150.0, 180.0)];
    let list = RangeList::new(&values, scale(), 1440.0);

    assert_eq!(list.align_start(10.0, 1), Some(180.0));
    assert_eq!(list.align_end(500.0, 0), Some(150.0));
}

#[test]
fn unknown_rows_are_ignored() {
    let values = demo_values();
    let list = RangeList::new(&values, scale(), 1440.0);

    assert_eq!(list.align_start(10.0, 5), None);
    assert_eq!(list.set_end_px(10.0, 5), None);
}

#[test]
fn set_start_px_changes_only_one_endpoint() {
    let values = demo_values();
    let list = RangeList::new(&values, scale(), 1440.0);

    let next = list.set_start_px(120.0, 0).expect("measured track");
    assert_eq!(next, vec![ValueRange::new(120.0, 300.0), ValueRange::new(360.0, 510.0)]);
}

#[test]
fn unmeasured_track_leaves_values_untouched() {
    let values = demo_values();
    let slider = RangeSlider::new(SliderId::new(1), RangeSliderConfig::new(1440.0))
        .expect("slider init");

    let mut emitted = Vec::new();
    let result = slider.set_end_px(&values, 0, 250.0, |next| emitted.push(next));

    assert_eq!(result, None);
    assert!(emitted.is_empty());
}

#[test]
fn dragging_end_onto_next_start_merges_at_step_one() {
    let values = demo_values();
    let slider = measured_slider(1, 500.0);

    let mut emitted = None;
    let len = slider.set_end_px(&values, 0, 400.0 * 500.0 / 1440.0, |next| emitted = Some(next));

    assert_eq!(len, Some(1));
    assert_eq!(emitted, Some(vec![ValueRange::new(60.0, 510.0)]));
}

#[test]
fn in_progress_drag_emits_full_snapped_list() {
    let values = demo_values();
    let slider = measured_slider(30, 1440.0);

    let mut emitted = None;
    let len = slider.set_end_px(&values, 0, 316.0, |next| emitted = Some(next));

    assert_eq!(len, Some(2));
    assert_eq!(
        emitted,
        Some(vec![ValueRange::new(60.0, 330.0), ValueRange::new(360.0, 510.0)])
    );
}

#[test]
fn normalize_snaps_an_initial_list() {
    let slider = measured_slider(30, 1440.0);
    let mut emitted = Vec::new();

    let len = slider.normalize(
        &[ValueRange::new(61.0, 299.0), ValueRange::new(301.0, 510.0)],
        |next| emitted = next,
    );

    assert_eq!(len, 1);
    assert_eq!(emitted, vec![ValueRange::new(60.0, 510.0)]);
}

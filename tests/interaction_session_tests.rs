use range_slider::core::{SliderId, Viewport};
use range_slider::interaction::{DragPhase, HandleEdge, HandleTarget, InteractionSession};

fn end_handle(row: usize) -> HandleTarget {
    HandleTarget::new(SliderId::new(1), row, HandleEdge::End)
}

#[test]
fn session_starts_idle_and_ignores_moves() {
    let session = InteractionSession::new();
    assert_eq!(session.phase(), DragPhase::Idle);
    assert_eq!(session.on_move(250.0), None);
}

#[test]
fn move_needs_both_handle_and_origin() {
    let mut session = InteractionSession::new();
    session.begin_handle_drag(end_handle(0));
    assert_eq!(session.on_move(250.0), None);
    assert_eq!(session.phase(), DragPhase::Idle);

    session.begin_track_drag(100.0);
    let drag = session.on_move(250.0).expect("dragging");
    assert_eq!(drag.handle, end_handle(0));
    assert_eq!(drag.pixel, 150.0);
}

#[test]
fn press_order_does_not_matter() {
    let mut session = InteractionSession::new();
    session.begin_track_drag(40.0);
    session.begin_handle_drag(end_handle(1));

    assert_eq!(
        session.phase(),
        DragPhase::Dragging {
            handle: end_handle(1),
            origin_x: 40.0,
        }
    );
}

#[test]
fn track_at_viewport_left_edge_still_drags() {
    let mut session = InteractionSession::new();
    session.begin_track_drag(0.0);
    session.begin_handle_drag(end_handle(0));

    let drag = session.on_move(25.0).expect("origin 0 is a valid origin");
    assert_eq!(drag.pixel, 25.0);
}

#[test]
fn end_drag_clears_handle_and_origin() {
    let mut session = InteractionSession::new();
    session.begin_track_drag(10.0);
    session.begin_handle_drag(end_handle(0));
    session.end_drag();

    assert_eq!(session.active_handle(), None);
    assert_eq!(session.origin_x(), None);
    assert_eq!(session.on_move(50.0), None);
}

#[test]
fn leaving_the_viewport_ends_the_drag() {
    let viewport = Viewport::new(800, 600);
    for (x, y) in [(0.0, 300.0), (800.0, 300.0), (400.0, 0.0), (400.0, 600.0), (-5.0, 300.0)] {
        let mut session = InteractionSession::new();
        session.begin_track_drag(10.0);
        session.begin_handle_drag(end_handle(0));

        assert_eq!(session.on_move_within(x, y, viewport), None);
        assert!(!session.is_dragging(), "exit at ({x}, {y}) should end drag");
    }
}

#[test]
fn moves_inside_the_viewport_are_forwarded() {
    let viewport = Viewport::new(800, 600);
    let mut session = InteractionSession::new();
    session.begin_track_drag(10.0);
    session.begin_handle_drag(end_handle(0));

    let drag = session
        .on_move_within(799.0, 599.0, viewport)
        .expect("inside viewport");
    assert_eq!(drag.pixel, 789.0);
    assert!(session.is_dragging());
}

#[test]
fn unmounting_another_row_keeps_the_drag() {
    let mut session = InteractionSession::new();
    session.begin_track_drag(10.0);
    session.begin_handle_drag(end_handle(1));

    session.release_row(SliderId::new(1), 0);
    session.release_row(SliderId::new(2), 1);
    assert!(session.is_dragging());

    session.release_row(SliderId::new(1), 1);
    assert!(!session.is_dragging());
    assert_eq!(session.active_handle(), None);
}

#[test]
fn releasing_a_slider_only_affects_its_own_handles() {
    let mut session = InteractionSession::new();
    session.begin_track_drag(10.0);
    session.begin_handle_drag(end_handle(0));

    session.release_slider(SliderId::new(9));
    assert!(session.is_dragging());

    session.release_slider(SliderId::new(1));
    assert_eq!(session.phase(), DragPhase::Idle);
}

#![allow(clippy::float_cmp)]

use super::*;

fn touch(id: i32, x: f64, y: f64) -> TouchPoint {
    TouchPoint::new(id, x, y)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_tracker_is_idle() {
    let tracker = TouchTracker::new();
    assert_eq!(tracker.tracked(), None);
}

#[test]
fn default_state_is_idle() {
    assert_eq!(TouchState::default(), TouchState::Idle);
}

// =============================================================
// Touch-start
// =============================================================

#[test]
fn start_adopts_first_touch_while_idle() {
    let mut tracker = TouchTracker::new();
    let accepted = tracker.start(&[touch(7, 10.0, 20.0)]);
    assert_eq!(accepted, Some(touch(7, 10.0, 20.0)));
    assert_eq!(tracker.tracked(), Some(7));
}

#[test]
fn start_with_two_changed_touches_adopts_first_in_event_order() {
    let mut tracker = TouchTracker::new();
    let accepted = tracker.start(&[touch(3, 1.0, 2.0), touch(9, 3.0, 4.0)]);
    assert_eq!(accepted, Some(touch(3, 1.0, 2.0)));
    assert_eq!(tracker.tracked(), Some(3));
}

#[test]
fn start_with_empty_changed_list_is_ignored() {
    let mut tracker = TouchTracker::new();
    assert_eq!(tracker.start(&[]), None);
    assert_eq!(tracker.tracked(), None);
}

#[test]
fn start_while_tracking_other_finger_is_ignored() {
    let mut tracker = TouchTracker::new();
    tracker.start(&[touch(7, 0.0, 0.0)]);
    let accepted = tracker.start(&[touch(9, 5.0, 5.0)]);
    assert_eq!(accepted, None);
    assert_eq!(tracker.tracked(), Some(7));
}

#[test]
fn start_while_tracking_same_id_is_accepted() {
    let mut tracker = TouchTracker::new();
    tracker.start(&[touch(7, 0.0, 0.0)]);
    let accepted = tracker.start(&[touch(9, 5.0, 5.0), touch(7, 8.0, 9.0)]);
    assert_eq!(accepted, Some(touch(7, 8.0, 9.0)));
    assert_eq!(tracker.tracked(), Some(7));
}

// =============================================================
// Touch-move
// =============================================================

#[test]
fn movement_while_idle_is_a_no_op() {
    let mut tracker = TouchTracker::new();
    assert_eq!(tracker.movement(&[touch(7, 1.0, 1.0)]), None);
    assert_eq!(tracker.tracked(), None);
}

#[test]
fn movement_matching_tracked_id_is_forwarded() {
    let mut tracker = TouchTracker::new();
    tracker.start(&[touch(7, 10.0, 20.0)]);
    let moved = tracker.movement(&[touch(7, 15.0, 25.0)]);
    assert_eq!(moved, Some(touch(7, 15.0, 25.0)));
    assert_eq!(tracker.tracked(), Some(7));
}

#[test]
fn movement_of_unrelated_finger_is_ignored() {
    let mut tracker = TouchTracker::new();
    tracker.start(&[touch(7, 0.0, 0.0)]);
    assert_eq!(tracker.movement(&[touch(9, 50.0, 50.0)]), None);
    assert_eq!(tracker.tracked(), Some(7));
}

#[test]
fn movement_picks_tracked_touch_out_of_several() {
    let mut tracker = TouchTracker::new();
    tracker.start(&[touch(7, 0.0, 0.0)]);
    let moved = tracker.movement(&[touch(9, 1.0, 1.0), touch(7, 2.0, 2.0), touch(4, 3.0, 3.0)]);
    assert_eq!(moved, Some(touch(7, 2.0, 2.0)));
}

// =============================================================
// Touch-end
// =============================================================

#[test]
fn end_matching_tracked_id_returns_to_idle() {
    let mut tracker = TouchTracker::new();
    tracker.start(&[touch(7, 0.0, 0.0)]);
    let lifted = tracker.end(&[touch(7, 3.0, 4.0)]);
    assert_eq!(lifted, Some(touch(7, 3.0, 4.0)));
    assert_eq!(tracker.tracked(), None);
}

#[test]
fn end_for_non_tracked_id_leaves_state_unchanged() {
    let mut tracker = TouchTracker::new();
    tracker.start(&[touch(7, 0.0, 0.0)]);
    assert_eq!(tracker.end(&[touch(9, 1.0, 1.0)]), None);
    assert_eq!(tracker.tracked(), Some(7));
}

#[test]
fn end_while_idle_is_a_no_op() {
    let mut tracker = TouchTracker::new();
    assert_eq!(tracker.end(&[touch(7, 0.0, 0.0)]), None);
    assert_eq!(tracker.tracked(), None);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn full_tap_and_drag_lifecycle() {
    let mut tracker = TouchTracker::new();

    assert_eq!(tracker.start(&[touch(7, 10.0, 20.0)]), Some(touch(7, 10.0, 20.0)));
    assert_eq!(tracker.movement(&[touch(7, 15.0, 25.0)]), Some(touch(7, 15.0, 25.0)));
    assert_eq!(tracker.end(&[touch(7, 15.0, 25.0)]), Some(touch(7, 15.0, 25.0)));

    // Events for the lifted finger arriving after the end are ignored.
    assert_eq!(tracker.movement(&[touch(7, 30.0, 30.0)]), None);
    assert_eq!(tracker.tracked(), None);
}

#[test]
fn at_most_one_identifier_is_ever_tracked() {
    let mut tracker = TouchTracker::new();
    tracker.start(&[touch(1, 0.0, 0.0)]);
    tracker.start(&[touch(2, 0.0, 0.0)]);
    tracker.movement(&[touch(2, 1.0, 1.0)]);
    tracker.end(&[touch(2, 1.0, 1.0)]);
    assert_eq!(tracker.tracked(), Some(1));

    tracker.end(&[touch(1, 2.0, 2.0)]);
    assert_eq!(tracker.tracked(), None);

    tracker.start(&[touch(2, 5.0, 5.0)]);
    assert_eq!(tracker.tracked(), Some(2));
}

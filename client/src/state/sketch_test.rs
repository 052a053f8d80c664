use super::*;

// =============================================================
// StrokeTracker
// =============================================================

#[test]
fn tracker_starts_idle() {
    let tracker = StrokeTracker::default();
    assert!(!tracker.is_drawing());
    assert_eq!(tracker.last_point(), CanvasPoint::default());
}

#[test]
fn move_without_press_paints_nothing() {
    let mut tracker = StrokeTracker::default();
    assert_eq!(tracker.extend(CanvasPoint::new(10.0, 10.0)), None);
    assert_eq!(tracker.last_point(), CanvasPoint::default());
}

#[test]
fn press_then_move_yields_segment_from_start() {
    let mut tracker = StrokeTracker::default();
    tracker.begin(CanvasPoint::new(5.0, 6.0));
    let seg = tracker.extend(CanvasPoint::new(7.0, 9.0)).unwrap();
    assert_eq!(seg.from, CanvasPoint::new(5.0, 6.0));
    assert_eq!(seg.to, CanvasPoint::new(7.0, 9.0));
}

#[test]
fn consecutive_moves_chain_segments() {
    let mut tracker = StrokeTracker::default();
    tracker.begin(CanvasPoint::new(0.0, 0.0));
    tracker.extend(CanvasPoint::new(1.0, 1.0));
    let seg = tracker.extend(CanvasPoint::new(2.0, 3.0)).unwrap();
    assert_eq!(seg.from, CanvasPoint::new(1.0, 1.0));
    assert_eq!(tracker.last_point(), CanvasPoint::new(2.0, 3.0));
}

#[test]
fn release_stops_stroke() {
    let mut tracker = StrokeTracker::default();
    tracker.begin(CanvasPoint::new(0.0, 0.0));
    tracker.end();
    assert!(!tracker.is_drawing());
    assert_eq!(tracker.extend(CanvasPoint::new(4.0, 4.0)), None);
}

#[test]
fn new_press_restarts_from_new_origin() {
    let mut tracker = StrokeTracker::default();
    tracker.begin(CanvasPoint::new(0.0, 0.0));
    tracker.extend(CanvasPoint::new(50.0, 50.0));
    tracker.end();
    tracker.begin(CanvasPoint::new(100.0, 20.0));
    let seg = tracker.extend(CanvasPoint::new(101.0, 21.0)).unwrap();
    assert_eq!(seg.from, CanvasPoint::new(100.0, 20.0));
}

// =============================================================
// Canvas constants
// =============================================================

#[test]
fn canvas_paints_black_ink_on_white_paper() {
    assert_eq!(STROKE_COLOR, "#000");
    assert_eq!(BACKGROUND_COLOR, "#fff");
    assert!((STROKE_WIDTH - 4.0).abs() < f64::EPSILON);
}

#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// DraftRect::normalized
// =============================================================

#[test]
fn normalized_preserves_forward_drag() {
    let draft = DraftRect {
        start: Point::new(10.0, 20.0),
        end: Point::new(110.0, 80.0),
    };
    let rect = draft.normalized();
    assert_eq!(rect, Rect { x: 10.0, y: 20.0, w: 100.0, h: 60.0 });
}

#[test]
fn normalized_flips_backward_drag() {
    let draft = DraftRect {
        start: Point::new(110.0, 80.0),
        end: Point::new(10.0, 20.0),
    };
    let rect = draft.normalized();
    assert_eq!(rect, Rect { x: 10.0, y: 20.0, w: 100.0, h: 60.0 });
}

#[test]
fn normalized_of_anchored_draft_is_empty() {
    let draft = DraftRect::anchored_at(Point::new(5.0, 5.0));
    let rect = draft.normalized();
    assert_eq!(rect.w, 0.0);
    assert_eq!(rect.h, 0.0);
}

// =============================================================
// Rect::contains
// =============================================================

#[test]
fn contains_is_edge_inclusive() {
    let rect = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
    assert!(rect.contains(Point::new(0.0, 0.0)));
    assert!(rect.contains(Point::new(10.0, 10.0)));
    assert!(rect.contains(Point::new(5.0, 5.0)));
    assert!(!rect.contains(Point::new(10.1, 5.0)));
    assert!(!rect.contains(Point::new(-0.1, 5.0)));
}

// =============================================================
// clamp
// =============================================================

#[test]
fn clamp_bounds_value() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
}

#[test]
fn clamp_prefers_min_on_inverted_bounds() {
    // max < min happens when a section spans the full canvas.
    assert_eq!(clamp(3.0, 0.0, -5.0), 0.0);
}

//! Geometry primitives: points, rectangles, and the in-progress draft.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Whether `pt` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.w && pt.y >= self.y && pt.y <= self.y + self.h
    }
}

/// The transient rectangle of an in-progress draw gesture.
///
/// `start` is the pointer-down anchor; `end` is the free corner tracking the
/// pointer. Never persisted; discarded or promoted to a section on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftRect {
    pub start: Point,
    pub end: Point,
}

impl DraftRect {
    /// Start a draft anchored at `pt` with both corners coincident.
    #[must_use]
    pub fn anchored_at(pt: Point) -> Self {
        Self { start: pt, end: pt }
    }

    /// The draft as a normalized rectangle, regardless of drag direction.
    #[must_use]
    pub fn normalized(&self) -> Rect {
        Rect {
            x: self.start.x.min(self.end.x),
            y: self.start.y.min(self.end.y),
            w: (self.end.x - self.start.x).abs(),
            h: (self.end.y - self.start.y).abs(),
        }
    }
}

/// Clamp `value` into `[min, max]`, with `min` winning if the bounds invert.
///
/// Bounds can invert transiently when a section is as large as the canvas;
/// `f64::clamp` would panic there, so the lower bound takes priority instead.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(value.min(max))
}

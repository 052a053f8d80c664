//! Pointer drag tracking for the drawing canvas.
//!
//! DESIGN
//! ======
//! The tracker only turns pointer events into line segments. Painting the
//! segments onto the `<canvas>` is the job of `util::sketch_canvas`, which
//! keeps this module free of browser types and testable natively.

#[cfg(test)]
#[path = "sketch_test.rs"]
mod sketch_test;

/// Canvas width and height in CSS pixels.
pub const CANVAS_SIZE: u32 = 280;
/// Stroke width used for every segment.
pub const STROKE_WIDTH: f64 = 4.0;
/// Ink colour.
pub const STROKE_COLOR: &str = "#000";
/// Paper colour painted on mount and on clear.
pub const BACKGROUND_COLOR: &str = "#fff";
/// Format the canvas is serialized to before submission.
pub const EXPORT_MIME: &str = "image/png";

/// Pointer position relative to the canvas origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight stroke between two consecutive pointer samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: CanvasPoint,
    pub to: CanvasPoint,
}

/// Drag state: whether the pointer is down and where it was last seen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StrokeTracker {
    drawing: bool,
    last: CanvasPoint,
}

impl StrokeTracker {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    #[must_use]
    pub fn last_point(&self) -> CanvasPoint {
        self.last
    }

    /// Pointer pressed: remember the start position and begin a stroke.
    pub fn begin(&mut self, at: CanvasPoint) {
        self.drawing = true;
        self.last = at;
    }

    /// Pointer moved. Returns the segment to paint while a stroke is active.
    pub fn extend(&mut self, to: CanvasPoint) -> Option<Segment> {
        if !self.drawing {
            return None;
        }
        let segment = Segment { from: self.last, to };
        self.last = to;
        Some(segment)
    }

    /// Pointer released or left the canvas.
    pub fn end(&mut self) {
        self.drawing = false;
    }
}

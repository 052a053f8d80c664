//! Imperative 2D-context calls for the sketch pad.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::state::sketch::{BACKGROUND_COLOR, CanvasPoint, EXPORT_MIME, STROKE_COLOR, STROKE_WIDTH, Segment};

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Round black pen.
pub fn prepare_pen(ctx: &CanvasRenderingContext2d) {
    ctx.set_line_width(STROKE_WIDTH);
    ctx.set_line_join("round");
    ctx.set_line_cap("round");
    ctx.set_stroke_style_str(STROKE_COLOR);
}

/// Cover the whole canvas with the paper colour.
pub fn paint_background(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
}

pub fn stroke_segment(ctx: &CanvasRenderingContext2d, segment: &Segment) {
    ctx.begin_path();
    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    ctx.stroke();
}

/// Serialize the canvas to a base64 `data:` URL.
///
/// # Errors
///
/// Returns the JS exception text if the canvas is tainted or export fails.
pub fn to_data_url(canvas: &HtmlCanvasElement) -> Result<String, String> {
    canvas
        .to_data_url_with_type(EXPORT_MIME)
        .map_err(|e| format!("{e:?}"))
}

/// Pointer position in canvas coordinates.
pub fn pointer_point(ev: &MouseEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

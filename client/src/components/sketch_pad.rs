//! Freehand drawing canvas with Clear / Recognize controls.
//!
//! ARCHITECTURE
//! ============
//! `StrokeTracker` turns pointer events into segments; `util::sketch_canvas`
//! paints them. The canvas element itself is the only record of the drawing,
//! so Recognize serializes it straight to a PNG data URL and hands that to the
//! page-level `on_recognize` callback.

use leptos::prelude::*;

use crate::state::prediction::PredictionState;
use crate::state::sketch::{CANVAS_SIZE, StrokeTracker};

#[cfg(feature = "hydrate")]
use crate::util::sketch_canvas::{context_2d, paint_background, pointer_point, prepare_pen, stroke_segment, to_data_url};

#[component]
pub fn SketchPad(on_recognize: Callback<String>) -> impl IntoView {
    let prediction = expect_context::<RwSignal<PredictionState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let tracker = RwSignal::new(StrokeTracker::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Some(ctx) = context_2d(&canvas) {
            prepare_pen(&ctx);
            paint_background(&ctx, &canvas);
        }
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        tracker.update(|t| t.begin(pointer_point(&ev)));
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let point = pointer_point(&ev);
            let Some(Some(segment)) = tracker.try_update(|t| t.extend(point)) else {
                return;
            };
            if let Some(ctx) = canvas_ref.get_untracked().as_ref().and_then(context_2d) {
                stroke_segment(&ctx, &segment);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_pointer_end = move |_: leptos::ev::PointerEvent| tracker.update(StrokeTracker::end);

    let on_clear = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(canvas) = canvas_ref.get_untracked() {
                if let Some(ctx) = context_2d(&canvas) {
                    paint_background(&ctx, &canvas);
                }
            }
        }
        tracker.update(StrokeTracker::end);
        prediction.update(PredictionState::reset);
    };

    let on_recognize_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            match to_data_url(&canvas) {
                Ok(image) => on_recognize.run(image),
                Err(e) => leptos::logging::error!("canvas export failed: {e}"),
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = on_recognize;

    view! {
        <div class="draw-panel">
            <div class="canvas-container">
                <canvas
                    id="drawing-canvas"
                    node_ref=canvas_ref
                    width=CANVAS_SIZE.to_string()
                    height=CANVAS_SIZE.to_string()
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_end
                    on:pointerleave=on_pointer_end
                ></canvas>
            </div>
            <div class="controls">
                <button id="clear-btn" class="btn btn-secondary" on:click=on_clear>
                    "Clear"
                </button>
                <button id="recognize-btn" class="btn btn-primary" on:click=on_recognize_click>
                    "Recognize"
                </button>
            </div>
        </div>
    }
}

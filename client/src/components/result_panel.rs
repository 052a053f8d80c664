//! Prediction label, loader and confidence bar.

use leptos::prelude::*;

use crate::state::prediction::PredictionState;

#[component]
pub fn ResultPanel() -> impl IntoView {
    let prediction = expect_context::<RwSignal<PredictionState>>();

    let loading = move || prediction.with(PredictionState::is_loading);

    view! {
        <div class="result-card">
            <h3>"Prediction"</h3>
            <div id="prediction-loader" class="loader" class:hidden=move || !loading()></div>
            <div id="prediction-text" class="prediction-text" class:hidden=loading>
                {move || prediction.with(|p| p.label.clone())}
            </div>
            <div class="confidence-bar">
                <div
                    class="confidence-fill"
                    style:width=move || prediction.with(PredictionState::confidence_width)
                ></div>
            </div>
        </div>
    }
}

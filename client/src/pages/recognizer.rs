//! The single recognizer page: header badge, input tabs, result card.
//!
//! ARCHITECTURE
//! ============
//! Both input panels produce a data URL and call the same `on_recognize`
//! callback, which owns the request lifecycle: take a ticket from
//! `PredictionState`, post to the backend, map the result to an outcome and
//! apply it only if the ticket is still current.

use leptos::prelude::*;

use crate::components::backend_badge::BackendBadge;
use crate::components::result_panel::ResultPanel;
use crate::components::sketch_pad::SketchPad;
use crate::components::tab_bar::TabBar;
use crate::components::upload_panel::UploadPanel;
use crate::config::BackendConfig;
use crate::state::prediction::PredictionState;
use crate::state::ui::{RecognizerTab, UiState};

#[cfg(feature = "hydrate")]
use crate::net::api::predict;
#[cfg(feature = "hydrate")]
use crate::state::prediction::outcome_from_result;
#[cfg(feature = "hydrate")]
use rand::{SeedableRng, rngs::SmallRng};

#[cfg(feature = "hydrate")]
fn cosmetic_rng() -> SmallRng {
    SmallRng::seed_from_u64(js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits())
}

fn recognize(config: BackendConfig, prediction: RwSignal<PredictionState>, image: String) {
    let Some(ticket) = prediction.try_update(PredictionState::begin) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = predict(&config, image).await;
        if let Err(e) = &result {
            leptos::logging::error!("prediction request failed: {e}");
        }
        let outcome = outcome_from_result(&result, &mut cosmetic_rng());
        let applied = prediction.try_update(|p| p.resolve(ticket, &outcome)).unwrap_or(false);
        if !applied {
            leptos::logging::log!("dropping stale prediction for request {ticket}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (config, image, ticket);
}

#[component]
pub fn RecognizerPage() -> impl IntoView {
    let config = expect_context::<BackendConfig>();
    let prediction = expect_context::<RwSignal<PredictionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_recognize = Callback::new(move |image: String| recognize(config.clone(), prediction, image));

    let panel_class = move |tab: RecognizerTab| ui.with(|u| u.panel_class(tab));

    view! {
        <div class="recognizer-page">
            <header class="recognizer-header">
                <h1>"Handwriting Recognition"</h1>
                <BackendBadge/>
            </header>
            <main class="recognizer-main">
                <section class="input-card">
                    <TabBar/>
                    <div id="draw-tab" class=move || panel_class(RecognizerTab::Draw)>
                        <SketchPad on_recognize=on_recognize/>
                    </div>
                    <div id="upload-tab" class=move || panel_class(RecognizerTab::Upload)>
                        <UploadPanel on_recognize=on_recognize/>
                    </div>
                </section>
                <ResultPanel/>
            </main>
        </div>
    }
}

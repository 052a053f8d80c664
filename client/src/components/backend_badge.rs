//! Header badge showing whether the recognition backend answers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polls `GET /status` once on mount and then every `POLL_INTERVAL_MS` for the
//! lifetime of the page. There is no backoff and no cancellation; each probe
//! is independent and simply overwrites the badge state.

use leptos::prelude::*;

use crate::config::BackendConfig;
use crate::state::health::BackendHealth;

#[cfg(feature = "hydrate")]
use crate::net::api::{fetch_backend_status, health_from_probe};
#[cfg(feature = "hydrate")]
use crate::state::health::POLL_INTERVAL_MS;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
fn probe(config: BackendConfig, health: RwSignal<BackendHealth>) {
    leptos::task::spawn_local(async move {
        let result = fetch_backend_status(&config).await;
        let next = health_from_probe(&result);
        if health.get_untracked() != next {
            match &result {
                Ok(_) => leptos::logging::log!("backend online at {}", config.base_url()),
                Err(e) => leptos::logging::warn!("backend offline at {}: {e}", config.base_url()),
            }
        }
        health.set(next);
    });
}

#[cfg(feature = "hydrate")]
fn start_polling(config: BackendConfig, health: RwSignal<BackendHealth>) {
    probe(config.clone(), health);
    let interval = Interval::new(POLL_INTERVAL_MS, move || probe(config.clone(), health));
    // Page-lifetime timer.
    interval.forget();
}

#[component]
pub fn BackendBadge() -> impl IntoView {
    let config = expect_context::<BackendConfig>();
    let health = expect_context::<RwSignal<BackendHealth>>();

    // Effects only run in the browser, once, after hydration.
    #[cfg(feature = "hydrate")]
    Effect::new(move || start_polling(config.clone(), health));
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <div
            id="backend-status"
            class=move || health.with(BackendHealth::css_class)
            title=move || health.with(BackendHealth::tooltip)
        >
            <span class="dot"></span>
            " "
            {move || health.with(BackendHealth::label)}
        </div>
    }
}

//! # client
//!
//! Leptos + WASM frontend for the handwriting-recognition demo.
//!
//! Users draw on a canvas or upload an image; the page posts the image as a
//! data URL to the external recognition backend and shows the returned label
//! with a cosmetic confidence bar. A header badge polls backend health.
//!
//! Browser-only code is gated behind the `hydrate` feature; the `ssr` build
//! renders the same components on the host server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    log::info!("hydrating handscript client");
    leptos::mount::hydrate_body(app::App);
}

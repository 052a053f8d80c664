//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{BACKEND_META_NAME, BackendConfig};
use crate::pages::recognizer::RecognizerPage;
use crate::state::{
    health::BackendHealth, prediction::PredictionState, ui::UiState, upload::UploadState,
};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `backend_url` is published in a meta tag so the hydrated client can find
/// the recognition backend without it being compiled into the bundle.
pub fn shell(options: LeptosOptions, backend_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_META_NAME content=backend_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(BackendConfig::from_document());
    provide_context(RwSignal::new(BackendHealth::default()));
    provide_context(RwSignal::new(PredictionState::default()));
    provide_context(RwSignal::new(UploadState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/handscript.css"/>
        <Title text="Handwriting Recognition"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RecognizerPage/>
            </Routes>
        </Router>
    }
}

//! Draw / Upload tab buttons.

use leptos::prelude::*;

use crate::state::ui::{RecognizerTab, UiState};

#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="tabs">
            {RecognizerTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || ui.with(|u| u.tab_button_class(tab))
                            data-tab=tab.key()
                            on:click=move |_| ui.update(|u| u.activate(tab))
                        >
                            {tab.title()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

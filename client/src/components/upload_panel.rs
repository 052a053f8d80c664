//! Image upload: drop zone, hidden file picker and preview.
//!
//! Only the first file of a drop or selection is considered. Files whose MIME
//! type is not `image/*` are ignored without feedback; accepted files are read
//! into a data URL and replace the drop zone with a preview.

use leptos::prelude::*;

use crate::state::upload::UploadState;

#[cfg(feature = "hydrate")]
use crate::util::file_reader::read_as_data_url;

#[cfg(feature = "hydrate")]
fn handle_file(file: Option<web_sys::File>, upload: RwSignal<UploadState>) {
    let Some(file) = file else {
        return;
    };
    if !upload.with_untracked(|u| u.admit(&file.type_())) {
        return;
    }
    leptos::task::spawn_local(async move {
        match read_as_data_url(&file).await {
            Ok(data_url) => upload.update(|u| u.accept(data_url)),
            Err(e) => leptos::logging::error!("failed to read {}: {e}", file.name()),
        }
    });
}

#[component]
pub fn UploadPanel(on_recognize: Callback<String>) -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_zone_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.drag_hover = true);
    };

    let on_drag_leave = move |_: leptos::ev::DragEvent| {
        upload.update(|u| u.drag_hover = false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.drag_hover = false);
        #[cfg(feature = "hydrate")]
        handle_file(
            ev.data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0)),
            upload,
        );
    };

    let on_file_change = move |_: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        handle_file(
            input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0)),
            upload,
        );
    };

    let on_upload_recognize = move |_| {
        if let Some(image) = upload.with(|u| u.preview.clone()) {
            on_recognize.run(image);
        }
    };

    let shows_drop_zone = move || upload.with(UploadState::shows_drop_zone);

    view! {
        <div class="upload-panel">
            <div
                id="drop-zone"
                class="drop-zone"
                class:hidden=move || !shows_drop_zone()
                style:border-color=move || upload.with(UploadState::drop_zone_border)
                on:click=on_zone_click
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <p>"Drag & drop an image here, or click to browse"</p>
            </div>
            <input
                id="file-input"
                class="hidden"
                type="file"
                accept="image/*"
                node_ref=input_ref
                on:change=on_file_change
            />
            <div id="preview-container" class="preview-container" class:hidden=shows_drop_zone>
                <img
                    id="image-preview"
                    alt="Uploaded image preview"
                    src=move || upload.with(|u| u.preview.clone().unwrap_or_default())
                />
                <button id="upload-recognize-btn" class="btn btn-primary" on:click=on_upload_recognize>
                    "Recognize"
                </button>
            </div>
        </div>
    }
}

//! `FileReader` wrapped as a future.
//!
//! The reader's `onload`/`onerror` callbacks settle a JS promise which is then
//! awaited through `wasm-bindgen-futures`, so callers can read a dropped file
//! inside `spawn_local` like any other async step.

use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// Read `file` into a base64 `data:` URL.
///
/// # Errors
///
/// Returns a description of the JS error if the reader cannot be created,
/// fails mid-read, or produces a non-string result.
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(describe)?;

    let promise = Promise::new(&mut |resolve, reject| {
        let done_reader = reader.clone();
        let reject_on_load = reject.clone();
        let on_load = Closure::once_into_js(move || {
            let settled = match done_reader.result() {
                Ok(value) => resolve.call1(&JsValue::NULL, &value),
                Err(err) => reject_on_load.call1(&JsValue::NULL, &err),
            };
            if let Err(err) = settled {
                leptos::logging::error!("file reader settle failed: {err:?}");
            }
        });
        let on_error = Closure::once_into_js(move || {
            if let Err(err) = reject.call1(&JsValue::NULL, &JsValue::from_str("file read failed")) {
                leptos::logging::error!("file reader settle failed: {err:?}");
            }
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(describe)?;

    let value = JsFuture::from(promise).await.map_err(describe)?;
    value
        .as_string()
        .ok_or_else(|| "file reader result was not a string".to_owned())
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

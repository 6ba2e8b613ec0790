//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use crate::core::ApiError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the browser document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get the current URL hash (including the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash (adds to browser history and fires `hashchange`).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Log a diagnostic message to the browser console.
///
/// No-op on the host, so core logic that logs stays unit-testable.
pub fn console_debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a warning to the browser console.
pub fn console_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn js_err(value: JsValue) -> ApiError {
    ApiError::Browser(format!("{value:?}"))
}

/// Pull the first selected file out of a file input, clearing it so the
/// same file can be picked again.
pub fn take_selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    let file = input.files()?.get(0);
    input.set_value("");
    file
}

/// Offer binary content as a client-side download under `filename`.
///
/// Creates a temporary object URL and clicks a detached anchor, the
/// browser-sanctioned way to trigger a save dialog.
pub fn save_blob(bytes: &[u8], filename: &str) -> Result<(), ApiError> {
    let document =
        document().ok_or_else(|| ApiError::Browser("document not available".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ApiError::Browser("anchor element expected".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("document body not available".to_string()))?;
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    anchor.remove();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

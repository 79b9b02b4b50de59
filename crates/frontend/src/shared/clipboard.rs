//! Clipboard helper built on the Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard, running `on_success` once the write
/// resolves (used to show a confirmation toast). Failures are silent.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .is_ok()
            {
                on_success();
            }
        }
    });
}

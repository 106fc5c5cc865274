//! Clipboard Access
//!
//! Thin wrapper over the async browser clipboard API. The core never calls
//! this; only the copy button does.

use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard
pub async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;
    let promise: js_sys::Promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map_err(|err| format!("clipboard write failed: {:?}", err))?;
    Ok(())
}

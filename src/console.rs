//! Browser console logging.
//!
//! On non-wasm targets these are no-ops so native tests never reach an
//! imported JS function.

#[cfg(target_arch = "wasm32")]
pub(crate) fn log(message: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}

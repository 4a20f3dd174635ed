//! Browser adapters for the controller traits.
//!
//! Each adapter holds the `web-sys` handles it writes to and implements one
//! trait from the core modules. Missing optional elements are skipped and
//! failed DOM calls are logged; none of them surface to the user.

pub mod content;
pub mod storage;
pub mod tabs;
pub mod theme;

use wasm_bindgen::{JsCast, JsValue};

/// Human-readable form of a thrown JS value: the `Error` message when there
/// is one, otherwise its string or debug form.
pub(crate) fn js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

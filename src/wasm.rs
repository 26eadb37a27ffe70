//! WASM bindings for in-browser previews.
//!
//! This module exposes the pure derivation steps to JavaScript via
//! wasm-bindgen. Documents cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::validate::parse_document_str;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Validate document JSON and render it to HTML.
#[wasm_bindgen]
pub fn render_html(json: &str) -> Result<String, JsValue> {
    let document = parse_document_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(crate::render::render_with(&document, &RenderConfig::default()))
}

/// Validate document JSON and produce an excerpt of at most `max_length`
/// characters plus an ellipsis.
#[wasm_bindgen]
pub fn excerpt(json: &str, max_length: usize) -> Result<String, JsValue> {
    let document = parse_document_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(crate::text::excerpt(&document, max_length))
}

/// Check whether document JSON is a well-formed block sequence.
#[wasm_bindgen]
pub fn is_valid_document(json: &str) -> bool {
    serde_json::from_str(json)
        .map(|value| crate::validate(&value))
        .unwrap_or(false)
}

/// Normalize a title into a slug.
#[wasm_bindgen]
pub fn derive_slug(title: &str) -> String {
    crate::slug::derive_slug(title)
}

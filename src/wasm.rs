//! WASM bindings for merchant-graph.
//!
//! Exposes `layoutFunnels` and `layoutFunnelsWithConfig` to JavaScript via
//! wasm-bindgen. Both take and return JSON strings.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;

/// Lay out a JSON array of funnels with the default trigger catalog.
#[wasm_bindgen(js_name = "layoutFunnels")]
pub fn layout_funnels(funnels_json: &str) -> Result<String, JsError> {
    crate::layout_funnels_json(funnels_json, &LayoutConfig::default())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out a JSON array of funnels with a JSON layout config.
///
/// An empty `config_json` means the default config.
#[wasm_bindgen(js_name = "layoutFunnelsWithConfig")]
pub fn layout_funnels_with_config(funnels_json: &str, config_json: &str) -> Result<String, JsError> {
    let config = if config_json.trim().is_empty() {
        LayoutConfig::default()
    } else {
        LayoutConfig::from_json(config_json).map_err(|e| JsError::new(&e.to_string()))?
    };
    crate::layout_funnels_json(funnels_json, &config).map_err(|e| JsError::new(&e.to_string()))
}

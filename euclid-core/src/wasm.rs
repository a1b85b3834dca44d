//! WASM bindings for euclid-core
//!
//! Exposes sequence generation as plain exported functions. JavaScript keeps
//! any per-instance state itself; nothing is registered process-wide.

#[cfg(feature = "wasm")]
use crate::engine::generate_with;
#[cfg(feature = "wasm")]
use crate::types::{Distribution, PatternParams};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Generate a sequence as a `Uint8Array` of 0/1 values
///
/// Raw values are clamped exactly like host inlets clamp them.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn generate(hits: i32, beats: i32, offset: i32, ping_pong: bool) -> Vec<u8> {
    crate::engine::generate_raw(hits as i64, beats as i64, offset as i64, ping_pong).to_ints()
}

/// Request object accepted by [`generate_pattern`]
#[cfg(feature = "wasm")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRequest {
    pub hits: i64,
    pub beats: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub ping_pong: bool,
    #[serde(default)]
    pub distribution: Distribution,
}

/// Generate from a `{ hits, beats, offset?, pingPong?, distribution? }` object
///
/// Returns `{ success, params, sequence, grid }` or `{ success: false, error }`.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn generate_pattern(request: JsValue) -> JsValue {
    let request: PatternRequest = match serde_wasm_bindgen::from_value(request) {
        Ok(r) => r,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&serde_json::json!({
                "success": false,
                "error": e.to_string(),
            }))
            .unwrap_or(JsValue::NULL)
        }
    };

    let params = PatternParams::new(
        request.hits,
        request.beats,
        request.offset,
        request.ping_pong,
    );
    let sequence = generate_with(&params, request.distribution);

    serde_wasm_bindgen::to_value(&serde_json::json!({
        "success": true,
        "params": params,
        "sequence": sequence.to_ints(),
        "grid": sequence.to_grid(),
    }))
    .unwrap_or(JsValue::NULL)
}

/// Parse `(hits,beats[,offset])` notation and generate
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn generate_notation(notation: &str, ping_pong: bool) -> JsValue {
    let result = notation
        .parse::<PatternParams>()
        .map(|params| params.with_ping_pong(ping_pong));

    let value = match result {
        Ok(params) => serde_json::json!({
            "success": true,
            "params": params,
            "sequence": crate::engine::generate(&params).to_ints(),
        }),
        Err(e) => serde_json::json!({
            "success": false,
            "error": e.to_string(),
        }),
    };
    serde_wasm_bindgen::to_value(&value).unwrap_or(JsValue::NULL)
}

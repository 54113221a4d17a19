//! Wave clip-path generator.
//!
//! Samples a cosine wave into a CSS `clip-path: polygon(...)` and formats the
//! rule block a page copies to the clipboard. The sampler is pure; the
//! `WaveGenerator` shell owns the form state on the JS side.

use wasm_bindgen::prelude::*;
use serde::Serialize;

pub mod types;
pub mod error;
pub mod number;
pub mod color;
pub mod css;
pub mod sampler;
pub mod generator;
pub mod commands;
pub mod svg;

pub use error::WaveError;
pub use generator::WaveGenerator;
pub use sampler::{sample_wave, try_sample_wave};
pub use types::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SampleOutput {
    polygon: String,
    css_block: String,
}

/// Samples a caller-owned config object, returning `{ polygon, cssBlock }`.
#[wasm_bindgen(js_name = sampleWave)]
pub fn sample_wave_js(config: JsValue) -> Result<JsValue, JsValue> {
    let config: WaveConfig = serde_wasm_bindgen::from_value(config)?;
    let result = sample_wave(&config);
    let output = SampleOutput { polygon: result.polygon, css_block: result.css_block };
    Ok(serde_wasm_bindgen::to_value(&output)?)
}

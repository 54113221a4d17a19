use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::css::preview_style;
use crate::error::WaveError;
use crate::number::coerce_number;
use crate::sampler::{sample_wave, try_sample_wave};
use crate::types::{PolygonResult, WaveConfig};

/// Holds the configuration the form edits and the polygon derived from it.
///
/// Every mutation resamples immediately, so the getters never see a stale
/// result. In strict mode a mutation that fails validation is discarded and
/// the previous configuration stays in place.
#[wasm_bindgen]
pub struct WaveGenerator {
    pub(crate) config: WaveConfig,
    pub(crate) result: PolygonResult,
    pub(crate) strict: bool,
}

impl Default for WaveGenerator {
    fn default() -> Self {
        WaveGenerator::with_config(WaveConfig::default())
    }
}

impl WaveGenerator {
    pub fn with_config(config: WaveConfig) -> WaveGenerator {
        let result = sample_wave(&config);
        WaveGenerator { config, result, strict: false }
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn result(&self) -> &PolygonResult {
        &self.result
    }

    pub fn set_field(&mut self, name: &str, text: &str) -> Result<(), WaveError> {
        let mut candidate = self.config.clone();
        candidate.set_number(name, coerce_number(text))?;
        self.commit(candidate)
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), WaveError> {
        let mut candidate = self.config.clone();
        candidate.color = color.to_string();
        self.commit(candidate)
    }

    pub fn update(&mut self, patch_json: &str) -> Result<(), WaveError> {
        let patch: serde_json::Value = serde_json::from_str(patch_json)?;
        let mut candidate = self.config.clone();
        candidate.apply_json(&patch)?;
        self.commit(candidate)
    }

    pub fn load_config(&mut self, config_json: &str) -> Result<(), WaveError> {
        let candidate: WaveConfig = serde_json::from_str(config_json)?;
        self.commit(candidate)
    }

    pub fn reset(&mut self) {
        self.config = WaveConfig::default();
        self.result = sample_wave(&self.config);
    }

    fn commit(&mut self, candidate: WaveConfig) -> Result<(), WaveError> {
        let result = if self.strict {
            try_sample_wave(&candidate).map_err(|err| {
                log::warn!("rejected wave configuration: {}", err);
                err
            })?
        } else {
            sample_wave(&candidate)
        };
        log::debug!("wave resampled: {:?}", candidate);
        self.config = candidate;
        self.result = result;
        Ok(())
    }
}

#[wasm_bindgen]
impl WaveGenerator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WaveGenerator {
        init_runtime();
        WaveGenerator::default()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Switching to strict mode does not revalidate the current config.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn polygon(&self) -> String {
        self.result.polygon.clone()
    }

    pub fn css_text(&self) -> String {
        self.result.css_block.clone()
    }

    pub fn preview_style(&self) -> String {
        preview_style(&self.config, &self.result.polygon)
    }

    pub fn config_json(&self) -> String {
        serde_json::to_string(&self.config).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn result_json(&self) -> String {
        serde_json::to_string(&self.result).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen(js_name = setField)]
    pub fn js_set_field(&mut self, name: &str, text: &str) -> Result<(), JsValue> {
        Ok(self.set_field(name, text)?)
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn js_set_color(&mut self, color: &str) -> Result<(), JsValue> {
        Ok(self.set_color(color)?)
    }

    #[wasm_bindgen(js_name = update)]
    pub fn js_update(&mut self, patch_json: &str) -> Result<(), JsValue> {
        Ok(self.update(patch_json)?)
    }

    #[wasm_bindgen(js_name = loadConfig)]
    pub fn js_load_config(&mut self, config_json: &str) -> Result<(), JsValue> {
        Ok(self.load_config(config_json)?)
    }

    #[wasm_bindgen(js_name = reset)]
    pub fn js_reset(&mut self) {
        self.reset();
    }

    /// Writes the CSS block via `navigator.clipboard.writeText`.
    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self) -> Result<js_sys::Promise, JsValue> {
        let window = web_sys::window().ok_or_else(|| WaveError::Clipboard("no window".to_string()))?;
        let navigator = window.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(WaveError::Clipboard("navigator.clipboard is not available".to_string()).into());
        }
        let write_text: js_sys::Function =
            js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
        let promise = write_text.call1(&clipboard, &JsValue::from_str(&self.result.css_block))?;
        log::debug!("css copied to clipboard");
        Ok(promise.dyn_into::<js_sys::Promise>()?)
    }
}

fn init_runtime() {
    #[cfg(all(target_arch = "wasm32", feature = "console"))]
    {
        console_error_panic_hook::set_once();
        // Already set when a second generator is constructed.
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}

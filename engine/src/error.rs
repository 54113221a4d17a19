use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WaveError {
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field {field} expects {expected}")]
    InvalidValue { field: String, expected: &'static str },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl From<WaveError> for JsValue {
    fn from(err: WaveError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

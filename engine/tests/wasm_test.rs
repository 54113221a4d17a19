//! Browser checks for the JS-facing entry points.
//!
//! Run with `wasm-pack test --headless --chrome engine`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use wave_engine::{sample_wave_js, WaveGenerator};

wasm_bindgen_test_configure!(run_in_browser);

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn test_sample_wave_returns_polygon_and_css_block() {
    let config = Object::new();
    Reflect::set(&config, &"amplitude".into(), &JsValue::from_f64(0.0)).unwrap();
    Reflect::set(&config, &"offset".into(), &JsValue::from_str("100")).unwrap();

    let output = sample_wave_js(config.into()).unwrap();
    let polygon = get(&output, "polygon").as_string().unwrap();
    let css_block = get(&output, "cssBlock").as_string().unwrap();

    assert!(polygon.starts_with("100% 0%, 0% 0%, 0% 50%, 1% 50%"));
    assert!(css_block.starts_with("{\n  width: 500;\n  height: 200;\n"));
    assert!(css_block.contains(&format!("clip-path:polygon({});", polygon)));
}

#[wasm_bindgen_test]
fn test_sample_wave_rejects_non_objects() {
    assert!(sample_wave_js(JsValue::from_str("wave")).is_err());
}

#[wasm_bindgen_test]
fn test_copy_reports_missing_clipboard() {
    let navigator: JsValue = web_sys::window().unwrap().navigator().into();

    // Shadow the prototype getter so `navigator.clipboard` reads as undefined.
    let descriptor = Object::new();
    Reflect::set(&descriptor, &"value".into(), &JsValue::UNDEFINED).unwrap();
    Reflect::set(&descriptor, &"configurable".into(), &JsValue::from_bool(true)).unwrap();
    Object::define_property(navigator.unchecked_ref(), &"clipboard".into(), &descriptor);

    let generator = WaveGenerator::new();
    let err = generator.copy_to_clipboard().unwrap_err();

    Reflect::delete_property(navigator.unchecked_ref(), &"clipboard".into()).unwrap();

    let message = err.as_string().unwrap();
    assert!(message.starts_with("clipboard unavailable"), "{}", message);
}

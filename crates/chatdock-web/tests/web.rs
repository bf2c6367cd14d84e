//! Boundary tests for the widget configuration
//!
//! Run with `wasm-pack test --node`; under a native target this file
//! compiles to nothing.

#![cfg(target_arch = "wasm32")]

use chatdock_web::config;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn widget_options_cross_the_boundary_as_an_object() {
    let json = serde_json::to_string(&config::widget_options()).unwrap();
    let parsed = js_sys::JSON::parse(&json).unwrap();
    assert!(parsed.is_object());

    let webhook = js_sys::Reflect::get(&parsed, &JsValue::from_str("webhookUrl")).unwrap();
    assert_eq!(webhook.as_string().as_deref(), Some(config::WEBHOOK_URL));

    let mode = js_sys::Reflect::get(&parsed, &JsValue::from_str("mode")).unwrap();
    assert_eq!(mode.as_string().as_deref(), Some("window"));
}

#[wasm_bindgen_test]
fn widget_options_keep_streaming_disabled() {
    let json = serde_json::to_string(&config::widget_options()).unwrap();
    let parsed = js_sys::JSON::parse(&json).unwrap();

    let streaming = js_sys::Reflect::get(&parsed, &JsValue::from_str("enableStreaming")).unwrap();
    assert_eq!(streaming.as_bool(), Some(false));
}

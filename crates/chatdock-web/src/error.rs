//! Error type for page setup
//!
//! Nothing here is fatal to the host page. Every failure is logged and the
//! affected feature is simply not applied.

use core::fmt;

use wasm_bindgen::JsValue;

/// Errors that can occur while wiring the page
#[derive(Clone, Debug)]
pub enum SetupError {
    /// No global window object (not running in a browser)
    NoWindow,

    /// Window has no document
    NoDocument,

    /// The widget factory global is absent or not callable
    FactoryMissing,

    /// Widget options could not be serialized
    Config(String),

    /// A DOM call rejected
    Js(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "no window object"),
            SetupError::NoDocument => write!(f, "window has no document"),
            SetupError::FactoryMissing => write!(f, "chat widget factory not found on window"),
            SetupError::Config(msg) => write!(f, "widget options rejected: {}", msg),
            SetupError::Js(msg) => write!(f, "DOM call failed: {}", msg),
        }
    }
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SetupError::Js(msg)
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

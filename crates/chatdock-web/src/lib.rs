//! Browser glue for the chatdock widget shell
//!
//! This crate runs on the page that embeds the third-party chat widget.
//! It bootstraps the widget with a typed configuration, then augments the
//! widget's window once it mounts: a watermark behind the messages and
//! west/north/northwest resize handles whose size state lives in CSS
//! custom properties on the document root.
//!
//! All resize arithmetic lives in `chatdock-core`; this crate only moves
//! values between DOM events and that core.

use wasm_bindgen::prelude::*;

pub mod config;
mod dom;
mod error;
mod handles;
mod locator;
mod observer;
mod resync;
mod vars;
mod viewport;
mod watermark;
mod widget;

pub use error::SetupError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub(crate) fn console_error(s: &str);
}

/// Entry point, invoked by the module loader once the wasm is ready
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    widget::bootstrap();
    widget::install_rejection_hint()?;
    observer::enhance_when_mounted()?;
    resync::install_resize_listener()?;

    Ok(())
}

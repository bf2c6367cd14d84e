//! Watermark application

use chatdock_core::watermark::{declarations, effective_url};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::{config, locator};

/// Apply the watermark behind the messages
///
/// Idempotent; returns false when the feature is disabled or the body is
/// not mounted yet (callers retry on the next pass).
pub(crate) fn apply() -> bool {
    let url = match effective_url(config::WATERMARK_URL) {
        Some(url) => url,
        None => return false,
    };

    let body = match locator::find_chat_window().and_then(|win| locator::find_chat_body(&win)) {
        Some(body) => body,
        None => return false,
    };
    let body: HtmlElement = match body.dyn_into() {
        Ok(body) => body,
        Err(_) => return false,
    };

    let style = body.style();
    for (property, value) in declarations(url) {
        let _ = style.set_property(property, &value);
    }
    true
}

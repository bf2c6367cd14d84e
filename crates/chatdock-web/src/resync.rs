//! Viewport resync
//!
//! A shrinking viewport must shrink an oversized window, and the watermark
//! is reapplied in case the widget replaced its body element.

use chatdock_core::limits::DEFAULT_SIZE;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::SetupError;
use crate::{dom, vars, viewport, watermark};

/// Re-clamp the stored size and refresh the watermark on window resize
pub(crate) fn install_resize_listener() -> Result<(), SetupError> {
    let window = dom::window()?;

    let closure = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let limits = viewport::current_limits();
        let current = vars::read_size_or(DEFAULT_SIZE);
        let _ = vars::write_size(limits.clamp(current));
        watermark::apply();
    }));
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

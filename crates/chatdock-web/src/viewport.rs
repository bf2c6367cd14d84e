//! Viewport measurement

use chatdock_core::{Size, SizeLimits};

use crate::dom;

/// Current inner viewport size
fn viewport_size() -> Option<Size> {
    let window = dom::window().ok()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width, height))
}

/// Size limits for the viewport as measured right now
///
/// Rebuilt on every call so drag clamping tracks a window the user is
/// resizing mid-drag.
pub(crate) fn current_limits() -> SizeLimits {
    SizeLimits::for_viewport(viewport_size().unwrap_or(Size::new(1024.0, 768.0)))
}

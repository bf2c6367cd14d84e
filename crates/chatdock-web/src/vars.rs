//! Size variable store on the document root
//!
//! The two custom properties are the single source of truth the external
//! widget renders from; everything here reads and writes them through the
//! core's parse/format helpers.

use chatdock_core::vars::{format_px, parse_px, HEIGHT_VAR, WIDTH_VAR};
use chatdock_core::Size;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom;
use crate::error::SetupError;

/// Read one size variable, None if unset or unparsable
pub(crate) fn read_var(name: &str) -> Option<f64> {
    let window = dom::window().ok()?;
    let root = dom::document().ok()?.document_element()?;
    let style = window.get_computed_style(&root).ok()??;
    let value = style.get_property_value(name).ok()?;
    parse_px(&value)
}

/// Read the stored size, falling back per dimension
pub(crate) fn read_size_or(fallback: Size) -> Size {
    Size::new(
        read_var(WIDTH_VAR).unwrap_or(fallback.width),
        read_var(HEIGHT_VAR).unwrap_or(fallback.height),
    )
}

/// Write both size variables
///
/// Both dimensions are written on every update so the stored state never
/// holds a half-applied size.
pub(crate) fn write_size(size: Size) -> Result<(), SetupError> {
    let root = dom::document()?
        .document_element()
        .ok_or(SetupError::NoDocument)?;
    let root: HtmlElement = root
        .dyn_into()
        .map_err(|_| SetupError::Js("document root is not an HTML element".to_string()))?;

    let style = root.style();
    style.set_property(WIDTH_VAR, &format_px(size.width))?;
    style.set_property(HEIGHT_VAR, &format_px(size.height))?;
    Ok(())
}

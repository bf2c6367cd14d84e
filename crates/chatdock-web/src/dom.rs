//! Shared document access

use web_sys::{Document, Window};

use crate::error::SetupError;

/// Get the global window
pub(crate) fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

/// Get the page document
pub(crate) fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

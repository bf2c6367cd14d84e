//! Keyboard resize steps
//!
//! Arrow keys on a focused handle mirror the pointer sign conventions:
//! arrow-left grows width through a west-capable handle the same way a
//! leftward drag does, and arrow-up grows height through a north-capable
//! handle.

use crate::handle::HandleEdge;
use crate::limits::SizeLimits;
use crate::math::Size;

/// Pixels per arrow-key press
pub const STEP: f64 = 12.0;

/// Pixels per arrow-key press with Shift held
pub const SHIFT_STEP: f64 = 40.0;

/// Arrow keys recognized on a focused handle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

impl ArrowKey {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            "ArrowUp" => Some(ArrowKey::Up),
            "ArrowDown" => Some(ArrowKey::Down),
            _ => None,
        }
    }
}

/// Resolve one arrow-key press on a focused handle
///
/// Returns the clamped size to write. An arrow on an axis the handle does
/// not control leaves the size unchanged but still resolves, so the
/// caller suppresses the default scroll behavior for every arrow press
/// while a handle has focus.
pub fn key_resize(
    edge: HandleEdge,
    key: ArrowKey,
    shifted: bool,
    current: Size,
    limits: &SizeLimits,
) -> Size {
    let step = if shifted { SHIFT_STEP } else { STEP };

    let mut size = current;
    match key {
        ArrowKey::Left if edge.affects_width() => size.width += step,
        ArrowKey::Right if edge.affects_width() => size.width -= step,
        ArrowKey::Up if edge.affects_height() => size.height += step,
        ArrowKey::Down if edge.affects_height() => size.height -= step,
        _ => {}
    }

    limits.clamp(size)
}

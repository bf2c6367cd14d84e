//! Resize drag state machine
//!
//! The controller is either idle or holds one drag session. A session
//! snapshots the pointer position and window size at pointer-down; every
//! move event is resolved against that snapshot, never against the
//! previous move, so the resize cannot accumulate rounding drift.

use crate::handle::HandleEdge;
use crate::limits::SizeLimits;
use crate::math::{Size, Vec2};

/// State captured at pointer-down on a handle
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    /// Which handle started the drag
    pub edge: HandleEdge,
    /// Pointer position at drag start (client coordinates)
    pub start_pointer: Vec2,
    /// Window size at drag start
    pub start_size: Size,
}

/// Drag controller owning the current session
///
/// Dragging the west edge leftwards (negative dx) grows the width and
/// dragging the north edge upwards (negative dy) grows the height, because
/// the window is anchored at its opposite corner.
#[derive(Debug, Default)]
pub struct ResizeController {
    drag: Option<DragSession>,
}

impl ResizeController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get the current drag session
    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag session, replacing any session already in progress
    pub fn begin(&mut self, edge: HandleEdge, pointer: Vec2, start_size: Size) {
        self.drag = Some(DragSession {
            edge,
            start_pointer: pointer,
            start_size,
        });
    }

    /// Resolve a pointer move against the active session
    ///
    /// Returns the new clamped size to write, or None when idle (stray
    /// move events after teardown are ignored).
    pub fn update(&mut self, pointer: Vec2, limits: &SizeLimits) -> Option<Size> {
        let session = self.drag.as_ref()?;
        let delta = pointer - session.start_pointer;

        let mut size = session.start_size;
        if session.edge.affects_width() {
            size.width = session.start_size.width - delta.x;
        }
        if session.edge.affects_height() {
            size.height = session.start_size.height - delta.y;
        }

        Some(limits.clamp(size))
    }

    /// End the current drag session
    ///
    /// Returns true if a session was active. Pointer-up and pointer-capture
    /// loss both come through here; there is no other teardown path.
    pub fn end(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

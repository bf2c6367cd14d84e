//! Resize handle edges

/// Which edge of the widget window a handle resizes
///
/// Only the edges facing away from the anchored corner exist: the widget
/// window is pinned at its bottom-right, so resizing happens along the
/// west and north edges and their shared corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleEdge {
    /// Left edge, adjusts width
    West,
    /// Top edge, adjusts height
    North,
    /// Top-left corner, adjusts both
    NorthWest,
}

impl HandleEdge {
    /// All handles, in injection order
    pub const ALL: [HandleEdge; 3] = [HandleEdge::West, HandleEdge::North, HandleEdge::NorthWest];

    /// Check if dragging this handle changes the width
    #[inline]
    pub fn affects_width(&self) -> bool {
        matches!(self, HandleEdge::West | HandleEdge::NorthWest)
    }

    /// Check if dragging this handle changes the height
    #[inline]
    pub fn affects_height(&self) -> bool {
        matches!(self, HandleEdge::North | HandleEdge::NorthWest)
    }

    /// Class attribute value for the handle element
    pub fn class_attr(&self) -> &'static str {
        match self {
            HandleEdge::West => "dim-handle dim-handle-w",
            HandleEdge::North => "dim-handle dim-handle-n",
            HandleEdge::NorthWest => "dim-handle dim-handle-nw",
        }
    }

    /// CSS cursor style for this handle
    pub fn cursor(&self) -> &'static str {
        match self {
            HandleEdge::West => "ew-resize",
            HandleEdge::North => "ns-resize",
            HandleEdge::NorthWest => "nwse-resize",
        }
    }
}

//! 2D size type for the widget window dimensions

use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Clamp both dimensions to [min, max]
    ///
    /// The minimum wins when min > max (a viewport narrower than the
    /// minimum window width must not invert the interval).
    #[inline]
    pub fn clamp(self, min: Size, max: Size) -> Self {
        Self::new(
            self.width.min(max.width).max(min.width),
            self.height.min(max.height).max(min.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_clamp() {
        let min = Size::new(320.0, 420.0);
        let max = Size::new(950.0, 900.0);

        let s = Size::new(50.0, 5000.0).clamp(min, max);
        assert!((s.width - 320.0).abs() < 0.001);
        assert!((s.height - 900.0).abs() < 0.001);

        let inside = Size::new(420.0, 600.0).clamp(min, max);
        assert!((inside.width - 420.0).abs() < 0.001);
        assert!((inside.height - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_size_clamp_inverted_interval() {
        // Viewport max below the minimum: minimum takes precedence
        let min = Size::new(320.0, 420.0);
        let max = Size::new(200.0, 300.0);

        let s = Size::new(500.0, 500.0).clamp(min, max);
        assert!((s.width - 320.0).abs() < 0.001);
        assert!((s.height - 420.0).abs() < 0.001);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(0.0, 100.0).is_empty());
        assert!(!Size::new(420.0, 600.0).is_empty());
    }
}

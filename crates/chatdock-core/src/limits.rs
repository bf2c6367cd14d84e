//! Size limits derived from the viewport

use crate::math::Size;

/// Smallest width the widget window may take
pub const MIN_WIDTH: f64 = 320.0;

/// Smallest height the widget window may take
pub const MIN_HEIGHT: f64 = 420.0;

/// Hard ceiling for either dimension regardless of viewport
pub const MAX_EDGE: f64 = 1000.0;

/// Fraction of the viewport width available to the window
pub const WIDTH_FRACTION: f64 = 0.95;

/// Fraction of the viewport height available to the window
pub const HEIGHT_FRACTION: f64 = 0.90;

/// Fallback size when no variable is set and no rect can be measured
pub const DEFAULT_SIZE: Size = Size {
    width: 420.0,
    height: 600.0,
};

/// Min/max bounds for the widget window size
///
/// The maxima depend on the viewport, so limits are rebuilt from a fresh
/// viewport measurement on every use rather than cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeLimits {
    pub min: Size,
    pub max: Size,
}

impl SizeLimits {
    /// Compute limits for the given viewport size
    pub fn for_viewport(viewport: Size) -> Self {
        Self {
            min: Size::new(MIN_WIDTH, MIN_HEIGHT),
            max: Size::new(
                MAX_EDGE.min((viewport.width * WIDTH_FRACTION).floor()),
                MAX_EDGE.min((viewport.height * HEIGHT_FRACTION).floor()),
            ),
        }
    }

    /// Clamp a size into these limits
    #[inline]
    pub fn clamp(&self, size: Size) -> Size {
        size.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_small_viewport() {
        let limits = SizeLimits::for_viewport(Size::new(800.0, 600.0));
        assert!((limits.max.width - 760.0).abs() < 0.001);
        assert!((limits.max.height - 540.0).abs() < 0.001);
    }

    #[test]
    fn test_limits_large_viewport_hits_ceiling() {
        let limits = SizeLimits::for_viewport(Size::new(2560.0, 1440.0));
        assert!((limits.max.width - 1000.0).abs() < 0.001);
        assert!((limits.max.height - 1000.0).abs() < 0.001);
    }

    #[test]
    fn test_limits_maxima_are_floored() {
        // 1013 * 0.95 = 962.35, floor to 962
        let limits = SizeLimits::for_viewport(Size::new(1013.0, 1013.0));
        assert!((limits.max.width - 962.0).abs() < 0.001);
        // 1013 * 0.90 = 911.7, floor to 911
        assert!((limits.max.height - 911.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_respects_minimum_on_tiny_viewport() {
        let limits = SizeLimits::for_viewport(Size::new(200.0, 200.0));
        let clamped = limits.clamp(Size::new(500.0, 500.0));
        assert!((clamped.width - MIN_WIDTH).abs() < 0.001);
        assert!((clamped.height - MIN_HEIGHT).abs() < 0.001);
    }
}

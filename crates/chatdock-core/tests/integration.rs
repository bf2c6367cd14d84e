//! Integration tests for the resize core
//!
//! These tests drive the public API the way the web glue does:
//! - full drag sessions (begin, move, end) against viewport limits
//! - keyboard stepping while a handle has focus
//! - re-clamping persisted size after a viewport change

use chatdock_core::keyboard::{self, key_resize, ArrowKey};
use chatdock_core::limits::{self, SizeLimits};
use chatdock_core::vars;
use chatdock_core::{HandleEdge, ResizeController, Size, Vec2};

// =============================================================================
// Drag sessions
// =============================================================================

#[test]
fn test_full_west_drag_session() {
    let limits = SizeLimits::for_viewport(Size::new(1920.0, 1080.0));
    let mut ctl = ResizeController::new();

    ctl.begin(HandleEdge::West, Vec2::new(500.0, 400.0), limits::DEFAULT_SIZE);

    // Drag 80px left in three moves; only the last one matters
    let mut size = limits::DEFAULT_SIZE;
    for x in [470.0, 450.0, 420.0] {
        size = ctl.update(Vec2::new(x, 400.0), &limits).unwrap();
    }

    assert!((size.width - 500.0).abs() < 0.001);
    assert!((size.height - 600.0).abs() < 0.001);

    assert!(ctl.end());
    assert!(!ctl.is_dragging());
}

#[test]
fn test_northwest_drag_matches_spec_scenario() {
    // dx = -50, dy = -30 from 420x600 yields 470x630
    let limits = SizeLimits::for_viewport(Size::new(1920.0, 1080.0));
    let mut ctl = ResizeController::new();

    ctl.begin(HandleEdge::NorthWest, Vec2::new(300.0, 200.0), Size::new(420.0, 600.0));
    let size = ctl.update(Vec2::new(250.0, 170.0), &limits).unwrap();

    assert!((size.width - 470.0).abs() < 0.001);
    assert!((size.height - 630.0).abs() < 0.001);
}

#[test]
fn test_drag_never_escapes_limits() {
    let limits = SizeLimits::for_viewport(Size::new(1280.0, 720.0));
    let mut ctl = ResizeController::new();
    ctl.begin(HandleEdge::NorthWest, Vec2::new(640.0, 360.0), Size::new(420.0, 600.0));

    for step in -20..=20 {
        let pointer = Vec2::new(640.0 + step as f64 * 5000.0, 360.0 + step as f64 * 5000.0);
        let size = ctl.update(pointer, &limits).unwrap();
        assert!(size.width >= limits.min.width);
        assert!(size.width <= limits.max.width);
        assert!(size.height >= limits.min.height);
        assert!(size.height <= limits.max.height);
    }
}

#[test]
fn test_capture_loss_uses_same_teardown_as_pointer_up() {
    let limits = SizeLimits::for_viewport(Size::new(1920.0, 1080.0));
    let mut ctl = ResizeController::new();

    ctl.begin(HandleEdge::North, Vec2::new(100.0, 100.0), Size::new(420.0, 600.0));
    // Window blur mid-drag ends the session; later moves are stray
    assert!(ctl.end());
    assert!(ctl.update(Vec2::new(100.0, 50.0), &limits).is_none());
}

// =============================================================================
// Keyboard stepping
// =============================================================================

#[test]
fn test_keyboard_step_equivalence() {
    // N unmodified presses equal one N x 12px adjustment
    let limits = SizeLimits::for_viewport(Size::new(1920.0, 1080.0));
    let n = 7;

    let mut stepped = Size::new(420.0, 600.0);
    for _ in 0..n {
        stepped = key_resize(HandleEdge::West, ArrowKey::Left, false, stepped, &limits);
    }

    let expected = limits.clamp(Size::new(420.0 + n as f64 * keyboard::STEP, 600.0));
    assert!((stepped.width - expected.width).abs() < 0.001);
}

#[test]
fn test_shifted_step_is_40px() {
    let limits = SizeLimits::for_viewport(Size::new(1920.0, 1080.0));
    let size = key_resize(
        HandleEdge::North,
        ArrowKey::Up,
        true,
        Size::new(420.0, 600.0),
        &limits,
    );
    assert!((size.height - 640.0).abs() < 0.001);
}

#[test]
fn test_keyboard_clamps_like_drags() {
    let limits = SizeLimits::for_viewport(Size::new(1920.0, 1080.0));
    let mut size = Size::new(990.0, 600.0);
    for _ in 0..10 {
        size = key_resize(HandleEdge::West, ArrowKey::Left, true, size, &limits);
    }
    assert!((size.width - limits.max.width).abs() < 0.001);
}

// =============================================================================
// Viewport resync
// =============================================================================

#[test]
fn test_shrinking_viewport_shrinks_persisted_size() {
    // Persisted 900x700 from a prior larger viewport, now 800x600
    let limits = SizeLimits::for_viewport(Size::new(800.0, 600.0));
    let resynced = limits.clamp(Size::new(900.0, 700.0));

    assert!(resynced.width <= 760.0);
    assert!(resynced.height <= 540.0);
    assert!((resynced.width - 760.0).abs() < 0.001);
    assert!((resynced.height - 540.0).abs() < 0.001);
}

#[test]
fn test_resync_is_idempotent() {
    let limits = SizeLimits::for_viewport(Size::new(800.0, 600.0));
    let once = limits.clamp(Size::new(900.0, 700.0));
    let twice = limits.clamp(once);
    assert_eq!(once, twice);
}

// =============================================================================
// Size variable projection
// =============================================================================

#[test]
fn test_size_survives_variable_roundtrip() {
    let size = Size::new(470.0, 630.0);
    let width = vars::parse_px(&vars::format_px(size.width)).unwrap();
    let height = vars::parse_px(&vars::format_px(size.height)).unwrap();
    assert!((width - 470.0).abs() < 0.001);
    assert!((height - 630.0).abs() < 0.001);
}

#[test]
fn test_unset_variable_falls_back() {
    // An unset custom property reads as an empty string
    let fallback = vars::parse_px("").map_or(limits::DEFAULT_SIZE.width, |w| w);
    assert!((fallback - 420.0).abs() < 0.001);
}

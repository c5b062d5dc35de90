//! Assertion utilities for robot testing
//!
//! Positions and scales come out of spring and tween steps, so most checks
//! here compare with a tolerance.

use storyview_ui::StoryFrame;
use storyview_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that a rectangle contains a point.
pub fn assert_rect_contains_point(rect: Rect, x: f32, y: f32, msg: &str) {
    assert!(
        rect.contains(x, y),
        "{}: point ({}, {}) not in rect {:?}",
        msg,
        x,
        y,
        rect
    );
}

/// Assert that a frame shows the story at rest: full size, unmoved, square.
pub fn assert_frame_at_rest(frame: &StoryFrame, msg: &str) {
    assert_approx_eq(frame.transform.scale, 1.0, 1e-4, &format!("{} - scale", msg));
    assert_approx_eq(
        frame.transform.translate_x,
        0.0,
        0.05,
        &format!("{} - translate_x", msg),
    );
    assert_approx_eq(
        frame.transform.translate_y,
        0.0,
        0.05,
        &format!("{} - translate_y", msg),
    );
    assert_approx_eq(frame.corner_radius, 0.0, 1e-4, &format!("{} - corner", msg));
}

/// Assert that the scale in `frame` lies within `[min_scale, 1]`.
pub fn assert_scale_within(frame: &StoryFrame, min_scale: f32, msg: &str) {
    let scale = frame.transform.scale;
    assert!(
        scale >= min_scale && scale <= 1.0,
        "{}: scale {} outside [{}, 1]",
        msg,
        scale,
        min_scale
    );
}

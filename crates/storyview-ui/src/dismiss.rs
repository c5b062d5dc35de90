//! Release classification.
//!
//! The release position is projected forward along the release velocity and
//! snapped to the nearest rest position: the top of the screen (cancel) or
//! one viewport height down (dismiss). A slow drag far down can still cancel
//! and a short fast flick can still dismiss.

use storyview_foundation::GestureSample;

use crate::transform::finite_or_zero;

/// Seconds of release velocity added to the release position before snapping.
pub const SNAP_VELOCITY_FACTOR: f32 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissOutcome {
    Dismiss,
    Cancel,
}

/// Pick the point closest to `value + SNAP_VELOCITY_FACTOR * velocity`.
///
/// Ties go to the point listed first. Returns `None` only for an empty list.
pub fn snap_point(value: f32, velocity: f32, points: &[f32]) -> Option<f32> {
    snap_point_with_factor(value, velocity, SNAP_VELOCITY_FACTOR, points)
}

fn snap_point_with_factor(value: f32, velocity: f32, factor: f32, points: &[f32]) -> Option<f32> {
    let projected = finite_or_zero(value) + factor * finite_or_zero(velocity);
    let mut best: Option<(f32, f32)> = None;
    for &point in points {
        let delta = (projected - point).abs();
        match best {
            // Strictly closer only, so the earlier point wins a tie.
            Some((_, best_delta)) if delta >= best_delta => {}
            _ => best = Some((point, delta)),
        }
    }
    best.map(|(point, _)| point)
}

/// Classify a release with the default velocity factor.
pub fn decide(sample: &GestureSample, viewport_height: f32) -> DismissOutcome {
    decide_with_factor(sample, viewport_height, SNAP_VELOCITY_FACTOR)
}

/// Classify a release. Only the vertical axis counts.
///
/// The candidates are ordered `[0, viewport_height]`, so a release that
/// projects exactly halfway cancels. A release with no displacement and no
/// velocity always cancels.
pub fn decide_with_factor(
    sample: &GestureSample,
    viewport_height: f32,
    velocity_factor: f32,
) -> DismissOutcome {
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        return DismissOutcome::Cancel;
    }
    let snapped = snap_point_with_factor(
        sample.translation_y,
        sample.velocity_y,
        velocity_factor,
        &[0.0, viewport_height],
    );
    if snapped == Some(viewport_height) {
        DismissOutcome::Dismiss
    } else {
        DismissOutcome::Cancel
    }
}

#[cfg(test)]
#[path = "tests/dismiss_tests.rs"]
mod tests;

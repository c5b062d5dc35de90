use super::*;

use proptest::prelude::*;

const HEIGHT: f32 = 800.0;

fn release(translation_y: f32, velocity_y: f32) -> GestureSample {
    GestureSample::new(0.0, translation_y, 0.0, velocity_y)
}

#[test]
fn motionless_tap_cancels() {
    assert_eq!(decide(&release(0.0, 0.0), HEIGHT), DismissOutcome::Cancel);
}

#[test]
fn full_height_drag_dismisses() {
    assert_eq!(decide(&release(HEIGHT, 0.0), HEIGHT), DismissOutcome::Dismiss);
}

#[test]
fn fast_flick_overrides_short_drag() {
    assert_eq!(
        decide(&release(0.1 * HEIGHT, 3_000.0), HEIGHT),
        DismissOutcome::Dismiss
    );
}

#[test]
fn upward_fling_overrides_long_drag() {
    assert_eq!(
        decide(&release(0.9 * HEIGHT, -3_000.0), HEIGHT),
        DismissOutcome::Cancel
    );
}

#[test]
fn slow_drag_below_half_cancels() {
    assert_eq!(
        decide(&release(0.4 * HEIGHT, 50.0), HEIGHT),
        DismissOutcome::Cancel
    );
}

#[test]
fn exact_midpoint_cancels() {
    assert_eq!(decide(&release(HEIGHT / 2.0, 0.0), HEIGHT), DismissOutcome::Cancel);
    // Projection lands exactly on the midpoint too.
    assert_eq!(decide(&release(300.0, 500.0), HEIGHT), DismissOutcome::Cancel);
}

#[test]
fn horizontal_motion_is_ignored() {
    let sample = GestureSample::new(HEIGHT * 4.0, 10.0, 8_000.0, 0.0);
    assert_eq!(decide(&sample, HEIGHT), DismissOutcome::Cancel);
}

#[test]
fn non_finite_input_is_read_as_zero() {
    assert_eq!(decide(&release(f32::NAN, 0.0), HEIGHT), DismissOutcome::Cancel);
    assert_eq!(
        decide(&release(HEIGHT, f32::NEG_INFINITY), HEIGHT),
        DismissOutcome::Dismiss
    );
    assert_eq!(decide(&release(HEIGHT, 0.0), f32::NAN), DismissOutcome::Cancel);
}

#[test]
fn larger_velocity_factor_favours_momentum() {
    let sample = release(0.1 * HEIGHT, 1_000.0);
    assert_eq!(decide(&sample, HEIGHT), DismissOutcome::Cancel);
    assert_eq!(
        decide_with_factor(&sample, HEIGHT, 0.5),
        DismissOutcome::Dismiss
    );
}

#[test]
fn snap_point_prefers_first_on_tie() {
    assert_eq!(snap_point(5.0, 0.0, &[0.0, 10.0]), Some(0.0));
    assert_eq!(snap_point(5.0, 0.0, &[10.0, 0.0]), Some(10.0));
    assert_eq!(snap_point(5.0, 0.0, &[]), None);
}

#[test]
fn snap_point_projects_velocity() {
    assert_eq!(snap_point(0.0, 100.0, &[0.0, 20.0, 40.0]), Some(20.0));
    assert_eq!(snap_point(40.0, -200.0, &[0.0, 20.0, 40.0]), Some(0.0));
}

proptest! {
    #[test]
    fn dismiss_matches_projection(y in -2_000.0f32..2_000.0, vy in -8_000.0f32..8_000.0) {
        let projected = y + SNAP_VELOCITY_FACTOR * vy;
        let outcome = decide(&release(y, vy), HEIGHT);
        let expected = if (projected - HEIGHT).abs() < projected.abs() {
            DismissOutcome::Dismiss
        } else {
            DismissOutcome::Cancel
        };
        prop_assert_eq!(outcome, expected);
    }

    #[test]
    fn downward_velocity_never_turns_dismiss_into_cancel(
        y in 0.0f32..HEIGHT,
        vy in 0.0f32..8_000.0,
        extra in 0.0f32..2_000.0,
    ) {
        if decide(&release(y, vy), HEIGHT) == DismissOutcome::Dismiss {
            prop_assert_eq!(decide(&release(y, vy + extra), HEIGHT), DismissOutcome::Dismiss);
        }
    }
}

use super::*;

use storyview_core::{FrameClock, FRAME_INTERVAL_NANOS};

fn pump(clock: &FrameClock, frame_time: &mut u64, max_frames: usize) -> usize {
    let mut frames = 0;
    while clock.has_frame_callbacks() && frames < max_frames {
        *frame_time += FRAME_INTERVAL_NANOS;
        clock.drain_frame_callbacks(*frame_time);
        frames += 1;
    }
    frames
}

#[test]
fn tween_interpolates_over_time() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());
    value.animate_to(24.0, AnimationType::Tween(AnimationSpec::tween(300, Easing::LinearEasing)));
    assert!(value.is_running());
    assert_eq!(value.value(), 0.0);

    let mut frame_time = 0u64;
    let mut saw_midpoint = false;
    for _ in 0..32 {
        if !value.is_running() {
            break;
        }
        frame_time += FRAME_INTERVAL_NANOS;
        clock.drain_frame_callbacks(frame_time);
        let current = value.value();
        if current > 0.0 && current < 24.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "tween should report intermediate values");
    assert_eq!(value.value(), 24.0);
    assert!(!value.is_running());
    assert!(!clock.has_frame_callbacks());
}

#[test]
fn spring_with_velocity_moves_along_velocity_first() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(100.0, clock.clone());
    value.animate_to_with_velocity(0.0, SpringSpec::gesture_settle(), 2_000.0);

    let mut frame_time = 0u64;
    // First frame establishes the time base, second frame integrates.
    for _ in 0..2 {
        frame_time += FRAME_INTERVAL_NANOS;
        clock.drain_frame_callbacks(frame_time);
    }

    assert!(
        value.value() > 100.0,
        "downward release velocity should carry the value past its start, got {}",
        value.value()
    );
}

#[test]
fn spring_converges_to_target() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(-250.0, clock.clone());
    value.animate_to_with_velocity(0.0, SpringSpec::gesture_settle(), -800.0);

    let mut frame_time = 0u64;
    let frames = pump(&clock, &mut frame_time, 2_000);

    assert!(frames < 2_000, "spring never settled");
    assert_eq!(value.value(), 0.0);
    assert_eq!(value.velocity(), 0.0);
    assert!(!value.is_running());
}

#[test]
fn spring_already_at_rest_finishes_without_frames() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());
    value.animate_to_with_velocity(0.0, SpringSpec::gesture_settle(), 0.0);

    assert!(!value.is_running());
    assert!(!clock.has_frame_callbacks());
}

#[test]
fn non_finite_velocity_is_treated_as_zero() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(10.0, clock.clone());
    value.animate_to_with_velocity(0.0, SpringSpec::gesture_settle(), f32::NAN);
    assert_eq!(value.velocity(), 0.0);

    let mut frame_time = 0u64;
    pump(&clock, &mut frame_time, 2_000);
    assert_eq!(value.value(), 0.0);
}

#[test]
fn snap_to_cancels_running_animation() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());
    value.animate_to(1.0, AnimationType::default());
    assert!(clock.has_frame_callbacks());

    value.snap_to(0.5);

    assert!(!value.is_running());
    assert!(!clock.has_frame_callbacks());
    assert_eq!(value.value(), 0.5);
    assert_eq!(value.target(), 0.5);
}

#[test]
fn stop_holds_current_value() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(300.0, clock.clone());
    value.animate_to_with_velocity(0.0, SpringSpec::gesture_settle(), 0.0);

    let mut frame_time = 0u64;
    for _ in 0..5 {
        frame_time += FRAME_INTERVAL_NANOS;
        clock.drain_frame_callbacks(frame_time);
    }
    let held = value.value();
    value.stop();

    pump(&clock, &mut frame_time, 10);
    assert_eq!(value.value(), held);
    assert!(held < 300.0 && held > 0.0);
}

#[test]
fn stop_from_an_earlier_callback_in_the_same_frame_wins() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(100.0, clock.clone());
    let mut handle = value.clone();
    let _stopper = clock.with_frame_nanos(move |_| handle.stop());
    value.animate_to_with_velocity(0.0, SpringSpec::gesture_settle(), 0.0);
    assert_eq!(clock.pending_frame_callbacks(), 2);

    clock.drain_frame_callbacks(FRAME_INTERVAL_NANOS);

    assert!(!value.is_running());
    assert!(!clock.has_frame_callbacks());
    assert_eq!(value.value(), 100.0);
    assert_eq!(value.target(), 100.0);
}

#[test]
fn restart_from_an_earlier_callback_keeps_a_single_frame_queued() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(100.0, clock.clone());
    let mut handle = value.clone();
    let _restarter = clock.with_frame_nanos(move |_| {
        handle.stop();
        handle.animate_to_with_velocity(50.0, SpringSpec::gesture_settle(), 0.0);
    });
    value.animate_to_with_velocity(0.0, SpringSpec::gesture_settle(), 0.0);

    clock.drain_frame_callbacks(FRAME_INTERVAL_NANOS);

    assert!(value.is_running());
    assert_eq!(clock.pending_frame_callbacks(), 1);
    assert_eq!(value.target(), 50.0);
    assert_eq!(value.value(), 100.0, "restarted spring has not stepped yet");

    let mut frame_time = FRAME_INTERVAL_NANOS;
    pump(&clock, &mut frame_time, 2_000);
    assert_eq!(value.value(), 50.0);
}

#[test]
fn dropping_last_handle_cancels_frame_callback() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());
    let observer = value.clone();
    value.animate_to(1.0, AnimationType::default());

    drop(value);
    assert!(clock.has_frame_callbacks(), "clone still holds the animation");

    drop(observer);
    assert!(!clock.has_frame_callbacks());
    clock.drain_frame_callbacks(FRAME_INTERVAL_NANOS);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::FastOutSlowInEasing,
        Easing::QuadraticInOut,
    ];

    for easing in easings {
        assert!(
            easing.transform(0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (easing.transform(1.0) - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn quadratic_in_out_is_symmetric() {
    assert_eq!(Easing::QuadraticInOut.transform(0.5), 0.5);
    let early = Easing::QuadraticInOut.transform(0.25);
    let late = Easing::QuadraticInOut.transform(0.75);
    assert!((early + late - 1.0).abs() < 1e-6);
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
}

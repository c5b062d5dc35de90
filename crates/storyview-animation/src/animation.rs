//! Frame-driven animation of scalar values.
//!
//! Provides time-based tweens with easing curves and velocity-seeded spring
//! physics. Every animation step runs inside a frame callback and re-queues
//! itself until the value comes to rest, so an in-flight animation is never a
//! blocking wait and can be cancelled between any two frames.

use std::cell::RefCell;
use std::rc::Rc;

use storyview_core::{FrameCallbackRegistration, FrameClock, NANOS_PER_SECOND};

use crate::spring::{SpringSpec, SpringState};

fn lerp(start: f32, target: f32, fraction: f32) -> f32 {
    start + (target - start) * fraction
}

/// Easing functions for tweens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
    /// Quadratic ease in for the first half, ease out for the second.
    QuadraticInOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::QuadraticInOut => {
                let t = fraction.clamp(0.0, 1.0);
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Cubic bezier easing through (0,0), (x1,y1), (x2,y2), (1,1).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |t: f32| (3.0 * ax * t + 2.0 * bx) * t + cx;

    // Newton-Raphson on x(t) = fraction, bisection when the slope flattens.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            solved = true;
            break;
        }
        let dx = slope(t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - error / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
    }

    sample(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Animated `f32` advanced by a [`FrameClock`].
///
/// Clones share the same value. When the last clone is dropped any queued
/// frame callback is cancelled, and callbacks already queued only hold a weak
/// reference, so nothing is written after teardown.
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    clock: FrameClock,
    label: &'static str,
    current: f32,
    velocity: f32,
    start: f32,
    target: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    /// Bumped for every queued callback; only the newest one may step.
    frame_generation: u64,
}

impl AnimatableInner {
    fn cancel_frame(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.start = self.target;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
    }
}

impl Animatable {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: f32, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            label: "Animatable",
            current: initial,
            velocity: 0.0,
            start: initial,
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
            frame_generation: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Name used in log output.
    pub fn with_label(self, label: &'static str) -> Self {
        self.inner.borrow_mut().label = label;
        self
    }

    /// Animate to the target value, keeping the current velocity.
    pub fn animate_to(&mut self, target: f32, animation: AnimationType) {
        let velocity = self.inner.borrow().velocity;
        self.start(target, animation, velocity);
    }

    /// Spring to the target value starting with the given velocity.
    ///
    /// A non-finite velocity is treated as zero.
    pub fn animate_to_with_velocity(&mut self, target: f32, spec: SpringSpec, velocity: f32) {
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self.start(target, AnimationType::Spring(spec), velocity);
    }

    fn start(&mut self, target: f32, animation: AnimationType, velocity: f32) {
        let should_schedule = {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_frame();

            inner.start = inner.current;
            inner.target = target;
            inner.velocity = velocity;
            inner.animation_type = animation;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;

            let already_settled = match animation {
                AnimationType::Spring(spec) => {
                    SpringState::new(inner.current, inner.velocity).is_at_rest(target, &spec)
                }
                AnimationType::Tween(_) => inner.current == target,
            };
            if already_settled {
                inner.finish();
            } else {
                log::trace!(
                    "{} animating {} -> {} ({:?})",
                    inner.label,
                    inner.current,
                    target,
                    animation
                );
            }
            !already_settled
        };

        if should_schedule {
            Self::schedule_frame(&self.inner);
        }
    }

    /// Return the current animation target.
    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    /// Velocity in units per second. Only springs track velocity.
    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    /// Whether a frame callback is queued for this value.
    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&mut self, target: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_frame();
        inner.target = target;
        inner.finish();
    }

    /// Stop any running animation and hold the current value.
    pub fn stop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if inner.registration.is_some() {
            log::trace!("{} stopped at {}", inner.label, inner.current);
        }
        inner.cancel_frame();
        inner.target = inner.current;
        inner.finish();
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let (clock, generation) = {
            let mut inner = this.borrow_mut();
            if inner.registration.is_some() {
                return;
            }
            inner.frame_generation = inner.frame_generation.wrapping_add(1);
            (inner.clock.clone(), inner.frame_generation)
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time, generation);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64, generation: u64) {
        let mut schedule_next = false;
        {
            let mut inner = this.borrow_mut();
            // A frame drain runs a snapshot of the queue, so this callback can
            // fire after an earlier one in the same batch stopped or restarted
            // the animation.
            if inner.frame_generation != generation {
                log::trace!("{} skipping superseded frame", inner.label);
                return;
            }
            match inner.registration.take() {
                Some(registration) => registration.disarm(),
                None => {
                    log::trace!("{} skipping frame after stop", inner.label);
                    return;
                }
            }

            match inner.animation_type {
                AnimationType::Tween(spec) => {
                    let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
                    let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
                    let linear_progress =
                        (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
                    let progress = spec.easing.transform(linear_progress);
                    inner.current = lerp(inner.start, inner.target, progress);

                    if linear_progress >= 1.0 {
                        inner.finish();
                    } else {
                        schedule_next = true;
                    }
                }
                AnimationType::Spring(spec) => {
                    // The first frame only establishes the time base.
                    match inner.last_frame_nanos.replace(frame_time_nanos) {
                        None => schedule_next = true,
                        Some(previous) => {
                            let dt = frame_time_nanos.saturating_sub(previous) as f32
                                / NANOS_PER_SECOND as f32;
                            let mut state = SpringState::new(inner.current, inner.velocity);
                            state.step(inner.target, &spec, dt);

                            if state.is_at_rest(inner.target, &spec) {
                                log::trace!("{} settled at {}", inner.label, inner.target);
                                inner.finish();
                            } else {
                                inner.current = state.value;
                                inner.velocity = state.velocity;
                                schedule_next = true;
                            }
                        }
                    }
                }
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Animatable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Animatable")
            .field("label", &inner.label)
            .field("value", &inner.current)
            .field("target", &inner.target)
            .field("velocity", &inner.velocity)
            .field("running", &inner.registration.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

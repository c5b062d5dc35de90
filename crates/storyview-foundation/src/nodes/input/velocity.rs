//! Release velocity estimation.
//!
//! Keeps a fixed ring of recent pointer positions and fits a least-squares
//! line per axis over the samples inside the velocity horizon. Adding a
//! sample and computing the velocity never allocate.

use storyview_ui_graphics::Point;

use crate::gesture_constants::{
    MAX_FLING_VELOCITY, VELOCITY_ASSUME_STOPPED_NANOS, VELOCITY_HORIZON_NANOS,
};

const HISTORY_SIZE: usize = 20;

/// Velocity in logical pixels per second.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    uptime_nanos: u64,
    position: Point,
}

#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: [Sample; HISTORY_SIZE],
    len: usize,
    head: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [Sample::default(); HISTORY_SIZE],
            len: 0,
            head: 0,
        }
    }

    /// Record a pointer position. Non-finite positions are dropped.
    pub fn add_position(&mut self, uptime_nanos: u64, position: Point) {
        if !position.is_finite() {
            log::warn!("dropping non-finite pointer sample {position:?}");
            return;
        }
        self.head = (self.head + 1) % HISTORY_SIZE;
        self.samples[self.head] = Sample {
            uptime_nanos,
            position,
        };
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    pub fn reset(&mut self) {
        self.len = 0;
        self.head = 0;
    }

    /// Estimate the current velocity, clamped to [`MAX_FLING_VELOCITY`] per axis.
    pub fn compute_velocity(&self) -> Velocity {
        if self.len < 2 {
            return Velocity::ZERO;
        }

        let newest = self.samples[self.head];
        let mut used = 0usize;
        let mut previous_time = newest.uptime_nanos;
        // Sums for the least-squares fit, with time in seconds relative to
        // the newest sample to keep magnitudes small.
        let (mut sum_t, mut sum_x, mut sum_y) = (0.0f64, 0.0f64, 0.0f64);
        let (mut sum_tt, mut sum_tx, mut sum_ty) = (0.0f64, 0.0f64, 0.0f64);

        for offset in 0..self.len {
            let index = (self.head + HISTORY_SIZE - offset) % HISTORY_SIZE;
            let sample = self.samples[index];
            let age = newest.uptime_nanos.saturating_sub(sample.uptime_nanos);
            let gap = previous_time.saturating_sub(sample.uptime_nanos);
            if age > VELOCITY_HORIZON_NANOS || gap > VELOCITY_ASSUME_STOPPED_NANOS {
                break;
            }
            previous_time = sample.uptime_nanos;

            let t = -(age as f64) / 1e9;
            let x = sample.position.x as f64;
            let y = sample.position.y as f64;
            sum_t += t;
            sum_x += x;
            sum_y += y;
            sum_tt += t * t;
            sum_tx += t * x;
            sum_ty += t * y;
            used += 1;
        }

        if used < 2 {
            return Velocity::ZERO;
        }

        let n = used as f64;
        let denominator = n * sum_tt - sum_t * sum_t;
        if denominator.abs() < f64::EPSILON {
            return Velocity::ZERO;
        }
        let slope_x = (n * sum_tx - sum_t * sum_x) / denominator;
        let slope_y = (n * sum_ty - sum_t * sum_y) / denominator;

        Velocity::new(clamp_velocity(slope_x), clamp_velocity(slope_y))
    }
}

fn clamp_velocity(value: f64) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    (value as f32).clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000_000;

    #[test]
    fn constant_motion_yields_its_speed() {
        let mut tracker = VelocityTracker::new();
        // 600 px/s downward, 120 px/s to the left, sampled every 8 ms.
        for step in 0..10u64 {
            let t = step * 8;
            tracker.add_position(
                t * MS,
                Point::new(-0.12 * t as f32, 0.6 * t as f32),
            );
        }

        let velocity = tracker.compute_velocity();
        assert!((velocity.y - 600.0).abs() < 1.0, "{velocity:?}");
        assert!((velocity.x + 120.0).abs() < 1.0, "{velocity:?}");
    }

    #[test]
    fn single_sample_has_no_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Point::new(0.0, 0.0));
        assert_eq!(tracker.compute_velocity(), Velocity::ZERO);
    }

    #[test]
    fn pause_before_release_means_zero_velocity() {
        let mut tracker = VelocityTracker::new();
        for step in 0..5u64 {
            tracker.add_position(step * 8 * MS, Point::new(0.0, step as f32 * 10.0));
        }
        tracker.add_position(200 * MS, Point::new(0.0, 40.0));
        assert_eq!(tracker.compute_velocity(), Velocity::ZERO);
    }

    #[test]
    fn samples_outside_horizon_are_ignored() {
        let mut tracker = VelocityTracker::new();
        // Fast early motion, then slow motion inside the last 100 ms.
        let mut y = 0.0f32;
        for step in 0..20u64 {
            let t = step * 10;
            y += if t < 100 { 50.0 } else { 1.0 };
            tracker.add_position(t * MS, Point::new(0.0, y));
        }
        let velocity = tracker.compute_velocity();
        assert!((velocity.y - 100.0).abs() < 5.0, "{velocity:?}");
    }

    #[test]
    fn velocity_is_clamped() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Point::new(0.0, 0.0));
        tracker.add_position(MS, Point::new(0.0, 1_000.0));
        let velocity = tracker.compute_velocity();
        assert_eq!(velocity.y, MAX_FLING_VELOCITY);
    }

    #[test]
    fn reset_forgets_history() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Point::new(0.0, 0.0));
        tracker.add_position(8 * MS, Point::new(0.0, 8.0));
        tracker.reset();
        assert_eq!(tracker.compute_velocity(), Velocity::ZERO);
    }
}

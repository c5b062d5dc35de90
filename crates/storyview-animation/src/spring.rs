//! Damped harmonic oscillator used for velocity-seeded settle animations.

/// Largest integration step. Frame deltas are split into steps of at most
/// this size so the integrator stays stable across dropped frames.
const SPRING_TIMESTEP_SECS: f32 = 0.004;

/// Frame deltas above this are treated as a stall and truncated.
const MAX_FRAME_DELTA_SECS: f32 = 0.25;

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant for a unit mass. Higher values = faster animation.
    pub stiffness: f32,
    /// Speed (units per second) under which the spring may come to rest.
    pub velocity_threshold: f32,
    /// Distance from the target under which the spring may come to rest.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Critically damped spring with material-style stiffness.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Spring used to return a released drag to rest.
    ///
    /// Mass 1, stiffness 100, damping coefficient 10 (ratio 0.5), resting
    /// below 0.01 px of displacement and 2 px/s of speed.
    pub fn gesture_settle() -> Self {
        Self {
            damping_ratio: 0.5,
            stiffness: 100.0,
            velocity_threshold: 2.0,
            position_threshold: 0.01,
        }
    }

    /// Damping coefficient for a unit mass.
    pub fn damping(&self) -> f32 {
        2.0 * self.damping_ratio * self.stiffness.max(0.0).sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Position and velocity of a value attached to a spring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    pub value: f32,
    pub velocity: f32,
}

impl SpringState {
    pub fn new(value: f32, velocity: f32) -> Self {
        Self { value, velocity }
    }

    /// Advance the spring towards `target` by `dt_secs`.
    ///
    /// Uses semi-implicit Euler integration in fixed sub-steps.
    pub fn step(&mut self, target: f32, spec: &SpringSpec, dt_secs: f32) {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        let stiffness = spec.stiffness;
        let damping = spec.damping();
        let mut remaining = dt_secs.min(MAX_FRAME_DELTA_SECS);

        while remaining > 0.0 {
            let step = SPRING_TIMESTEP_SECS.min(remaining);
            let displacement = self.value - target;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.value += self.velocity * step;
            remaining -= step;
        }
    }

    /// Whether both displacement and speed are under the spring's rest thresholds.
    pub fn is_at_rest(&self, target: f32, spec: &SpringSpec) -> bool {
        (self.value - target).abs() < spec.position_threshold
            && self.velocity.abs() < spec.velocity_threshold
    }
}

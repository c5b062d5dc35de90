//! Viewer configuration.

use storyview_animation::{AnimationSpec, Easing, SpringSpec};
use storyview_foundation::gesture_constants::DRAG_THRESHOLD;

use crate::dismiss::SNAP_VELOCITY_FACTOR;
use crate::error::StoryViewerError;
use crate::transform::TransformLimits;

/// Viewport height used when the host does not supply one, in logical pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 800.0;

/// Duration of the corner-radius transition, in milliseconds.
const CORNER_RADIUS_DURATION_MILLIS: u64 = 300;

/// Settings for a [`StoryViewer`](crate::StoryViewer).
///
/// The viewport height is read once when the viewer is mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryViewerOptions {
    /// Height of the viewer in logical pixels. A drag of this length reaches
    /// the minimum scale and is the dismiss rest position.
    pub viewport_height: f32,
    /// Scale bound and corner radii.
    pub limits: TransformLimits,
    /// Time-based transition between the corner radii.
    pub corner_radius_animation: AnimationSpec,
    /// Spring that returns a cancelled drag to rest.
    pub settle_spring: SpringSpec,
    /// Seconds of release velocity projected when classifying a release.
    pub snap_velocity_factor: f32,
    /// Touch slop for raw pointer input, in logical pixels.
    pub drag_threshold: f32,
}

impl Default for StoryViewerOptions {
    fn default() -> Self {
        Self {
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            limits: TransformLimits::default(),
            corner_radius_animation: AnimationSpec::tween(
                CORNER_RADIUS_DURATION_MILLIS,
                Easing::QuadraticInOut,
            ),
            settle_spring: SpringSpec::gesture_settle(),
            snap_velocity_factor: SNAP_VELOCITY_FACTOR,
            drag_threshold: DRAG_THRESHOLD,
        }
    }
}

impl StoryViewerOptions {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    pub fn with_viewport_height(mut self, viewport_height: f32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_min_scale(mut self, min_scale: f32) -> Self {
        self.limits.min_scale = min_scale;
        self
    }

    pub fn with_corner_radii(mut self, active: f32, inactive: f32) -> Self {
        self.limits.active_corner_radius = active;
        self.limits.inactive_corner_radius = inactive;
        self
    }

    pub fn with_corner_radius_animation(mut self, animation: AnimationSpec) -> Self {
        self.corner_radius_animation = animation;
        self
    }

    pub fn with_settle_spring(mut self, spring: SpringSpec) -> Self {
        self.settle_spring = spring;
        self
    }

    pub fn with_snap_velocity_factor(mut self, factor: f32) -> Self {
        self.snap_velocity_factor = factor;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), StoryViewerError> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(StoryViewerError::InvalidViewportHeight(self.viewport_height));
        }
        let min_scale = self.limits.min_scale;
        if !min_scale.is_finite() || min_scale <= 0.0 || min_scale > 1.0 {
            return Err(StoryViewerError::InvalidMinScale(min_scale));
        }
        for radius in [
            self.limits.active_corner_radius,
            self.limits.inactive_corner_radius,
        ] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(StoryViewerError::InvalidCornerRadius(radius));
            }
        }
        if !self.snap_velocity_factor.is_finite() || self.snap_velocity_factor < 0.0 {
            return Err(StoryViewerError::InvalidSnapVelocityFactor(
                self.snap_velocity_factor,
            ));
        }
        let spring = self.settle_spring;
        if !(spring.stiffness.is_finite() && spring.stiffness > 0.0)
            || !(spring.damping_ratio.is_finite() && spring.damping_ratio > 0.0)
        {
            return Err(StoryViewerError::InvalidSpring {
                stiffness: spring.stiffness,
                damping_ratio: spring.damping_ratio,
            });
        }
        Ok(())
    }
}

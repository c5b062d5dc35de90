//! Live visual transform derived from the drag state.
//!
//! Everything here is a pure function of the latest [`GestureState`]. Scale
//! is never animated on its own: it is recomputed from the translation every
//! frame, so a spring on the translation animates scale with it.

use storyview_ui_graphics::GraphicsLayer;

/// Scale reached when the story is dragged down a full viewport height.
pub const MIN_SCALE: f32 = 0.4;

/// Corner radius while a finger is on the story.
pub const ACTIVE_CORNER_RADIUS: f32 = 24.0;

/// Corner radius at rest.
pub const INACTIVE_CORNER_RADIUS: f32 = 0.0;

/// Behaviour of [`interpolate`] outside the input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrapolate {
    /// Pin to the nearest output bound.
    Clamp,
    /// Continue the line past the bounds.
    Extend,
}

/// Map `value` from the `input` range onto the `output` range.
///
/// A degenerate input range maps everything below it to `output[0]` and
/// everything else to `output[1]`.
pub fn interpolate(value: f32, input: [f32; 2], output: [f32; 2], extrapolate: Extrapolate) -> f32 {
    let span = input[1] - input[0];
    if span == 0.0 {
        return if value < input[0] { output[0] } else { output[1] };
    }
    let fraction = (value - input[0]) / span;
    let mapped = output[0] + (output[1] - output[0]) * fraction;
    match extrapolate {
        // Clamping the result rather than the fraction keeps the endpoints
        // exact under f32 rounding.
        Extrapolate::Clamp => mapped.clamp(output[0].min(output[1]), output[0].max(output[1])),
        Extrapolate::Extend => mapped,
    }
}

/// Drag state owned by the gesture tracker.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureState {
    pub active: bool,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl GestureState {
    pub const REST: GestureState = GestureState {
        active: false,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn new(active: bool, translate_x: f32, translate_y: f32) -> Self {
        Self {
            active,
            translate_x,
            translate_y,
        }
    }
}

/// Bounds the transform computer works within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformLimits {
    pub min_scale: f32,
    pub active_corner_radius: f32,
    pub inactive_corner_radius: f32,
}

impl Default for TransformLimits {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            active_corner_radius: ACTIVE_CORNER_RADIUS,
            inactive_corner_radius: INACTIVE_CORNER_RADIUS,
        }
    }
}

/// Transform composed onto the media surface for one frame.
///
/// `border_radius` is the radius the surface is heading for: the active
/// radius while a finger is down, the inactive one otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub border_radius: f32,
}

impl VisualTransform {
    pub const IDENTITY: VisualTransform = VisualTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        border_radius: INACTIVE_CORNER_RADIUS,
    };
}

impl Default for VisualTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<VisualTransform> for GraphicsLayer {
    fn from(transform: VisualTransform) -> Self {
        GraphicsLayer {
            alpha: 1.0,
            scale: transform.scale,
            translation_x: transform.translate_x,
            translation_y: transform.translate_y,
        }
    }
}

/// [`compute_transform_with`] using the default limits.
pub fn compute_transform(state: &GestureState, viewport_height: f32) -> VisualTransform {
    compute_transform_with(state, viewport_height, &TransformLimits::default())
}

/// Derive the visual transform for `state`.
///
/// The story shrinks from 1 towards `min_scale` as it is dragged down one
/// viewport height, and the translation is multiplied by the same scale so
/// the shrinking card stays under the finger. Non-finite translations are
/// read as zero; a non-positive viewport height disables scaling.
pub fn compute_transform_with(
    state: &GestureState,
    viewport_height: f32,
    limits: &TransformLimits,
) -> VisualTransform {
    let translate_x = finite_or_zero(state.translate_x);
    let translate_y = finite_or_zero(state.translate_y);

    let scale = if viewport_height.is_finite() && viewport_height > 0.0 {
        interpolate(
            translate_y,
            [0.0, viewport_height],
            [1.0, limits.min_scale],
            Extrapolate::Clamp,
        )
    } else {
        1.0
    };

    VisualTransform {
        translate_x: translate_x * scale,
        translate_y: translate_y * scale,
        scale,
        border_radius: if state.active {
            limits.active_corner_radius
        } else {
            limits.inactive_corner_radius
        },
    }
}

pub(crate) fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;

//! Shared gesture constants for touch/pointer handling.
//!
//! # DPI Considerations
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Drag threshold in logical pixels.
///
/// A pointer must travel further than this from its press position before a
/// drag starts. Releasing inside the threshold is a tap and never reaches
/// the dismiss logic.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Samples older than this, relative to the newest one, are ignored when
/// estimating release velocity.
pub const VELOCITY_HORIZON_NANOS: u64 = 100_000_000;

/// If the pointer rests this long before release, the release velocity is zero.
pub const VELOCITY_ASSUME_STOPPED_NANOS: u64 = 40_000_000;

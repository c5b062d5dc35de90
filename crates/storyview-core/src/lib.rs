//! Frame scheduling primitives for the story viewer.
//!
//! Everything that animates in the viewer is advanced by one-shot callbacks
//! queued on a [`FrameClock`]. The host drains the clock once per rendered
//! frame with the frame timestamp, and each callback decides whether it wants
//! to run again on the next frame.

mod frame_clock;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};

pub(crate) type FrameCallbackId = u64;

/// Nanoseconds in one second, for converting frame timestamps.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Frame interval of a 60 Hz display, in nanoseconds.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::{FRAME_INTERVAL_NANOS, NANOS_PER_SECOND};
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;

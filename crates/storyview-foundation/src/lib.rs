//! Pointer input plumbing for the story viewer.
//!
//! Raw pointer events are queued by the [`PointerDispatcher`], fed through a
//! [`DragGesture`] recogniser, and come out as [`DragEvent`]s carrying the
//! cumulative translation and, on release, the fling velocity.

pub mod gesture_constants;
pub mod nodes;

pub use nodes::input::*;

pub mod prelude {
    pub use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
    pub use crate::nodes::input::prelude::*;
}

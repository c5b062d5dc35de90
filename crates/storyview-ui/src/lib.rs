//! Full-screen story viewer with drag-to-dismiss.
//!
//! A vertical drag shrinks and rounds the story while it follows the finger.
//! On release the gesture either dismisses the viewer through the
//! [`Navigator`] or springs back to rest with the release momentum.
//!
//! ```
//! use storyview_core::FrameClock;
//! use storyview_ui::{StoryMedia, StoryViewer, StoryViewerOptions};
//!
//! let clock = FrameClock::new();
//! let story = StoryMedia::image("1", "https://example.com/story.jpg");
//! let mut viewer = StoryViewer::new(
//!     story,
//!     StoryViewerOptions::new(800.0),
//!     clock.clone(),
//!     || println!("back"),
//! )
//! .expect("valid options");
//!
//! viewer.on_start();
//! viewer.on_move(0.0, 400.0);
//! assert!((viewer.visual_transform().scale - 0.7).abs() < 1e-6);
//! ```

mod dismiss;
mod error;
mod navigation;
mod options;
mod story;
mod transform;
mod viewer;

pub use dismiss::{decide, decide_with_factor, snap_point, DismissOutcome, SNAP_VELOCITY_FACTOR};
pub use error::{MediaError, StoryViewerError};
pub use navigation::Navigator;
pub use options::{StoryViewerOptions, DEFAULT_VIEWPORT_HEIGHT};
pub use story::{MediaSource, StoryMedia, VideoPlayback};
pub use transform::{
    compute_transform, compute_transform_with, interpolate, Extrapolate, GestureState,
    TransformLimits, VisualTransform, ACTIVE_CORNER_RADIUS, INACTIVE_CORNER_RADIUS, MIN_SCALE,
};
pub use viewer::{StoryFrame, StoryViewer, ViewerPhase};

pub use storyview_foundation::{DragEvent, GestureSample, PointerEvent};

pub mod prelude {
    pub use crate::dismiss::DismissOutcome;
    pub use crate::navigation::Navigator;
    pub use crate::options::StoryViewerOptions;
    pub use crate::story::{MediaSource, StoryMedia};
    pub use crate::transform::{GestureState, VisualTransform};
    pub use crate::viewer::{StoryFrame, StoryViewer, ViewerPhase};
    pub use storyview_foundation::{DragEvent, GestureSample, PointerEvent};
}

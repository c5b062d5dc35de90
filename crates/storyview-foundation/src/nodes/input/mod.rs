pub mod dispatcher;
pub mod gestures;
pub mod types;
pub mod velocity;

pub use dispatcher::PointerDispatcher;
pub use gestures::{DragEvent, DragGesture, GestureSample};
pub use types::{PointerEvent, PointerEventKind, PointerId};
pub use velocity::{Velocity, VelocityTracker};

pub mod prelude {
    pub use super::dispatcher::PointerDispatcher;
    pub use super::gestures::{DragEvent, DragGesture, GestureSample};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId};
    pub use super::velocity::{Velocity, VelocityTracker};
}

//! Animation primitives driven by the story viewer's frame clock.

mod animation;
mod spring;

pub use animation::*;
pub use spring::{SpringSpec, SpringState};

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationSpec, AnimationType, Easing};
    pub use crate::spring::{SpringSpec, SpringState};
}

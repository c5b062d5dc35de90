//! Pure math/data for composing the story surface.
//!
//! Geometry primitives and the graphics layer description handed to the
//! renderer each frame.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{CornerRadii, GraphicsLayer, Point, Rect, RoundedCornerShape, Size};
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;

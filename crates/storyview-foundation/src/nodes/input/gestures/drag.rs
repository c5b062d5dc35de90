//! Single-pointer drag recogniser.
//!
//! Turns a pointer down/move/up sequence into drag phases: a drag starts once
//! the pointer leaves the touch slop, reports its translation cumulatively
//! from the press position, and ends with the release velocity.

use storyview_ui_graphics::Point;

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId};
use crate::nodes::input::velocity::VelocityTracker;

/// Drag snapshot reported once, at release.
///
/// Translations are logical pixels from the press position; velocities are
/// logical pixels per second.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureSample {
    pub translation_x: f32,
    pub translation_y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl GestureSample {
    pub fn new(translation_x: f32, translation_y: f32, velocity_x: f32, velocity_y: f32) -> Self {
        Self {
            translation_x,
            translation_y,
            velocity_x,
            velocity_y,
        }
    }
}

/// Phase of a drag as seen by gesture consumers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Start,
    Update {
        translation_x: f32,
        translation_y: f32,
    },
    End(GestureSample),
    /// The platform took the pointer away mid-drag.
    Cancel,
}

#[derive(Debug, Clone)]
pub struct DragGesture {
    threshold: f32,
    pointer: Option<PointerId>,
    origin: Point,
    translation: Point,
    dragging: bool,
    tracker: VelocityTracker,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGesture {
    pub fn new() -> Self {
        Self {
            threshold: DRAG_THRESHOLD,
            pointer: None,
            origin: Point::ZERO,
            translation: Point::ZERO,
            dragging: false,
            tracker: VelocityTracker::new(),
        }
    }

    /// Override the touch slop.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.max(0.0);
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn reset(&mut self) {
        self.pointer = None;
        self.origin = Point::ZERO;
        self.translation = Point::ZERO;
        self.dragging = false;
        self.tracker.reset();
    }

    /// Feed a pointer event, forwarding any resulting drag phases to `sink`.
    ///
    /// Only the first pointer to go down is tracked until it is released.
    pub fn on_pointer_event(&mut self, event: &PointerEvent, mut sink: impl FnMut(DragEvent)) {
        if event.kind != PointerEventKind::Cancel && !event.position.is_finite() {
            log::warn!("ignoring pointer event with non-finite position {event:?}");
            return;
        }

        match event.kind {
            PointerEventKind::Down => {
                if self.pointer.is_some() {
                    return;
                }
                self.reset();
                self.pointer = Some(event.id);
                self.origin = event.position;
                self.tracker.add_position(event.uptime_nanos, event.position);
            }
            PointerEventKind::Move => {
                if self.pointer != Some(event.id) {
                    return;
                }
                self.tracker.add_position(event.uptime_nanos, event.position);
                self.translation = event.position - self.origin;
                if !self.dragging && self.translation.distance() > self.threshold {
                    self.dragging = true;
                    log::trace!("drag started after {:?}", self.translation);
                    sink(DragEvent::Start);
                }
                if self.dragging {
                    event.consume();
                    sink(DragEvent::Update {
                        translation_x: self.translation.x,
                        translation_y: self.translation.y,
                    });
                }
            }
            PointerEventKind::Up => {
                if self.pointer != Some(event.id) {
                    return;
                }
                if self.dragging {
                    self.tracker.add_position(event.uptime_nanos, event.position);
                    self.translation = event.position - self.origin;
                    let velocity = self.tracker.compute_velocity();
                    event.consume();
                    sink(DragEvent::End(GestureSample::new(
                        self.translation.x,
                        self.translation.y,
                        velocity.x,
                        velocity.y,
                    )));
                }
                self.reset();
            }
            PointerEventKind::Cancel => {
                if self.dragging {
                    sink(DragEvent::Cancel);
                }
                self.reset();
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/drag_gesture_tests.rs"]
mod tests;

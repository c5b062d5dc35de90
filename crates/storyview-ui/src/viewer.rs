//! The story viewer: gesture tracking, release handling and settle animation.
//!
//! Data flows one way. Drag phases update the [`GestureState`]; every frame
//! the host reads [`StoryViewer::frame`], which recomputes the transform from
//! the current state; a release is classified once and either hands off to
//! the [`Navigator`] or springs the translation back to rest.
//!
//! The translation is the only animated input to the transform. Scale and
//! the target corner radius are always derived from it, so a settling spring
//! shrinks and grows the story consistently without a second timeline.

use smallvec::SmallVec;
use storyview_animation::{Animatable, AnimationType};
use storyview_core::FrameClock;
use storyview_foundation::{DragEvent, DragGesture, GestureSample, PointerEvent};
use storyview_ui_graphics::{GraphicsLayer, RoundedCornerShape};

use crate::dismiss::{decide_with_factor, DismissOutcome};
use crate::error::StoryViewerError;
use crate::navigation::Navigator;
use crate::options::StoryViewerOptions;
use crate::story::{MediaSource, StoryMedia};
use crate::transform::{compute_transform_with, finite_or_zero, GestureState, VisualTransform};

/// Where the viewer is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerPhase {
    /// At rest, waiting for a drag.
    Idle,
    /// A finger is on the story.
    Dragging,
    /// Springing back to rest after a cancelled drag.
    Settling,
    /// Handed off to the navigator; input is ignored until [`StoryViewer::reset`].
    ///
    /// The story stays frozen at its release translation. The viewer never
    /// resets itself: the host calls [`StoryViewer::reset`] if it reuses the
    /// viewer instead of unmounting it.
    Dismissed,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoryFrame {
    pub transform: VisualTransform,
    /// Corner radius to draw, eased towards `transform.border_radius`.
    pub corner_radius: f32,
    pub layer: GraphicsLayer,
    pub clip: RoundedCornerShape,
}

pub struct StoryViewer {
    story: StoryMedia,
    options: StoryViewerOptions,
    navigator: Box<dyn Navigator>,
    drag: DragGesture,
    active: bool,
    dismissed: bool,
    translate_x: Animatable,
    translate_y: Animatable,
    corner_radius: Animatable,
}

impl StoryViewer {
    /// Mount a viewer for `story`. Animations run on `clock`.
    pub fn new(
        story: StoryMedia,
        options: StoryViewerOptions,
        clock: FrameClock,
        navigator: impl Navigator + 'static,
    ) -> Result<Self, StoryViewerError> {
        options.validate()?;
        log::debug!(
            "mounting story {} (viewport height {})",
            story.id,
            options.viewport_height
        );
        let inactive_radius = options.limits.inactive_corner_radius;
        Ok(Self {
            drag: DragGesture::new().with_threshold(options.drag_threshold),
            story,
            options,
            navigator: Box::new(navigator),
            active: false,
            dismissed: false,
            translate_x: Animatable::new(0.0, clock.clone()).with_label("translate_x"),
            translate_y: Animatable::new(0.0, clock.clone()).with_label("translate_y"),
            corner_radius: Animatable::new(inactive_radius, clock).with_label("corner_radius"),
        })
    }

    pub fn story(&self) -> &StoryMedia {
        &self.story
    }

    /// The media surface to mount under the transform.
    pub fn media_surface(&self) -> &MediaSource {
        &self.story.source
    }

    pub fn options(&self) -> &StoryViewerOptions {
        &self.options
    }

    pub fn is_gesture_active(&self) -> bool {
        self.active
    }

    pub fn gesture_state(&self) -> GestureState {
        GestureState {
            active: self.active,
            translate_x: self.translate_x.value(),
            translate_y: self.translate_y.value(),
        }
    }

    pub fn phase(&self) -> ViewerPhase {
        if self.dismissed {
            ViewerPhase::Dismissed
        } else if self.active {
            ViewerPhase::Dragging
        } else if self.translate_x.is_running() || self.translate_y.is_running() {
            ViewerPhase::Settling
        } else {
            ViewerPhase::Idle
        }
    }

    /// A drag began. Interrupts a running settle, holding its position.
    pub fn on_start(&mut self) {
        if self.dismissed {
            log::debug!("ignoring drag start on dismissed story {}", self.story.id);
            return;
        }
        if self.active {
            return;
        }
        self.translate_x.stop();
        self.translate_y.stop();
        self.active = true;
        self.animate_corner_radius(self.options.limits.active_corner_radius);
        log::trace!("drag started on story {}", self.story.id);
    }

    /// Cumulative translation since the drag began.
    pub fn on_move(&mut self, dx: f32, dy: f32) {
        if !self.active {
            log::warn!("ignoring drag update without an active drag");
            return;
        }
        if !dx.is_finite() || !dy.is_finite() {
            log::warn!("ignoring non-finite drag translation ({dx}, {dy})");
            return;
        }
        self.translate_x.snap_to(dx);
        self.translate_y.snap_to(dy);
    }

    /// The finger lifted. Returns the outcome, or `None` if no drag was active.
    ///
    /// A finite release translation overwrites the tracked one before
    /// classifying, so the decision always matches what is on screen.
    pub fn on_end(&mut self, sample: GestureSample) -> Option<DismissOutcome> {
        if !self.active {
            log::warn!("ignoring drag end without an active drag");
            return None;
        }
        if sample.translation_x.is_finite() && sample.translation_y.is_finite() {
            self.translate_x.snap_to(sample.translation_x);
            self.translate_y.snap_to(sample.translation_y);
        }
        let velocity_x = finite_or_zero(sample.velocity_x);
        let velocity_y = finite_or_zero(sample.velocity_y);

        let release = GestureSample::new(
            self.translate_x.value(),
            self.translate_y.value(),
            velocity_x,
            velocity_y,
        );
        let outcome = decide_with_factor(
            &release,
            self.options.viewport_height,
            self.options.snap_velocity_factor,
        );
        log::debug!("story {} released {release:?} -> {outcome:?}", self.story.id);

        match outcome {
            DismissOutcome::Dismiss => {
                self.dismissed = true;
                self.navigator.go_back();
            }
            DismissOutcome::Cancel => self.settle(velocity_x, velocity_y),
        }

        self.active = false;
        self.animate_corner_radius(self.options.limits.inactive_corner_radius);
        Some(outcome)
    }

    /// The platform interrupted the drag. Settles back without dismissing.
    pub fn on_cancel(&mut self) {
        if !self.active {
            return;
        }
        log::debug!("drag cancelled on story {}", self.story.id);
        self.settle(0.0, 0.0);
        self.active = false;
        self.animate_corner_radius(self.options.limits.inactive_corner_radius);
    }

    pub fn handle_drag_event(&mut self, event: DragEvent) {
        if self.dismissed {
            log::trace!("story {} dismissed, dropping {event:?}", self.story.id);
            return;
        }
        match event {
            DragEvent::Start => self.on_start(),
            DragEvent::Update {
                translation_x,
                translation_y,
            } => self.on_move(translation_x, translation_y),
            DragEvent::End(sample) => {
                self.on_end(sample);
            }
            DragEvent::Cancel => self.on_cancel(),
        }
    }

    /// Feed a raw pointer event through the viewer's drag recogniser.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) {
        let mut drag_events: SmallVec<[DragEvent; 2]> = SmallVec::new();
        self.drag
            .on_pointer_event(event, |drag_event| drag_events.push(drag_event));
        for drag_event in drag_events {
            self.handle_drag_event(drag_event);
        }
    }

    /// Transform for the current state.
    pub fn visual_transform(&self) -> VisualTransform {
        compute_transform_with(
            &self.gesture_state(),
            self.options.viewport_height,
            &self.options.limits,
        )
    }

    pub fn frame(&self) -> StoryFrame {
        let transform = self.visual_transform();
        let corner_radius = self.corner_radius.value();
        StoryFrame {
            transform,
            corner_radius,
            layer: transform.into(),
            clip: RoundedCornerShape::uniform(corner_radius),
        }
    }

    /// Return to the mounted state: at rest, inactive, accepting input.
    pub fn reset(&mut self) {
        self.drag.reset();
        self.active = false;
        self.dismissed = false;
        self.translate_x.snap_to(0.0);
        self.translate_y.snap_to(0.0);
        self.corner_radius
            .snap_to(self.options.limits.inactive_corner_radius);
    }

    /// Stop every in-flight animation. Called on drop.
    pub fn dispose(&mut self) {
        self.drag.reset();
        self.translate_x.stop();
        self.translate_y.stop();
        self.corner_radius.stop();
    }

    fn settle(&mut self, velocity_x: f32, velocity_y: f32) {
        let spring = self.options.settle_spring;
        self.translate_x
            .animate_to_with_velocity(0.0, spring, velocity_x);
        self.translate_y
            .animate_to_with_velocity(0.0, spring, velocity_y);
    }

    fn animate_corner_radius(&mut self, target: f32) {
        if self.corner_radius.target() != target {
            self.corner_radius.animate_to(
                target,
                AnimationType::Tween(self.options.corner_radius_animation),
            );
        }
    }
}

impl Drop for StoryViewer {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for StoryViewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryViewer")
            .field("story", &self.story.id)
            .field("phase", &self.phase())
            .field("state", &self.gesture_state())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/viewer_tests.rs"]
mod tests;

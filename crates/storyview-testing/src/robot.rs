//! Robot-style harness for end-to-end viewer tests
//!
//! A [`StoryTestRule`] owns a viewer, the frame clock that drives it and a
//! navigator that records every dismissal. Tests script pointer input in
//! viewport coordinates and step time frame by frame, so gestures and the
//! animations they trigger run exactly as they would on a 60 Hz display.
//!
//! # Example
//!
//! ```
//! use storyview_testing::create_story_test;
//!
//! let mut robot = create_story_test(800.0);
//! robot.drag(200.0, 100.0, 200.0, 700.0, 10);
//! robot.release();
//! assert_eq!(robot.go_back_count(), 1);
//! ```

use std::cell::Cell;
use std::rc::Rc;

use storyview_core::{FrameClock, FRAME_INTERVAL_NANOS};
use storyview_foundation::{PointerDispatcher, PointerEvent};
use storyview_ui::{
    StoryFrame, StoryMedia, StoryViewer, StoryViewerError, StoryViewerOptions, ViewerPhase,
};
use storyview_ui_graphics::{Rect, Size};

/// Viewport width used by [`create_story_test`], in logical pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 400.0;

/// Frames [`StoryTestRule::wait_for_idle`] runs before giving up.
const MAX_IDLE_FRAMES: usize = 2_000;

/// Mount a viewer on an image story with default options.
pub fn create_story_test(viewport_height: f32) -> StoryTestRule {
    let story = StoryMedia::image("robot-story", "https://example.com/robot-story.jpg");
    match StoryTestRule::new(story, StoryViewerOptions::new(viewport_height)) {
        Ok(rule) => rule,
        Err(err) => panic!("cannot mount story viewer: {err}"),
    }
}

/// Programmatic control over a mounted story viewer.
pub struct StoryTestRule {
    clock: FrameClock,
    viewer: StoryViewer,
    dispatcher: PointerDispatcher,
    go_back_calls: Rc<Cell<usize>>,
    viewport: Size,
    frame_time_nanos: u64,
    pointer: Option<(f32, f32)>,
}

impl StoryTestRule {
    pub fn new(story: StoryMedia, options: StoryViewerOptions) -> Result<Self, StoryViewerError> {
        let clock = FrameClock::new();
        let go_back_calls = Rc::new(Cell::new(0));
        let calls = go_back_calls.clone();
        let viewport = Size::new(DEFAULT_VIEWPORT_WIDTH, options.viewport_height);
        let viewer = StoryViewer::new(story, options, clock.clone(), move || {
            calls.set(calls.get() + 1)
        })?;
        Ok(Self {
            clock,
            viewer,
            dispatcher: PointerDispatcher::new(),
            go_back_calls,
            viewport,
            frame_time_nanos: 0,
            pointer: None,
        })
    }

    /// Override the viewport width used for [`card_bounds`](Self::card_bounds).
    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.viewport.width = width;
        self
    }

    pub fn viewer(&self) -> &StoryViewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut StoryViewer {
        &mut self.viewer
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// How many times the viewer asked to navigate back.
    pub fn go_back_count(&self) -> usize {
        self.go_back_calls.get()
    }

    pub fn phase(&self) -> ViewerPhase {
        self.viewer.phase()
    }

    pub fn frame(&self) -> StoryFrame {
        self.viewer.frame()
    }

    /// On-screen bounds of the story surface for the current frame.
    pub fn card_bounds(&self) -> Rect {
        self.frame()
            .layer
            .transform_rect(Rect::from_size(self.viewport))
    }

    /// Advance time by one frame interval and run frame callbacks.
    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.clock.drain_frame_callbacks(self.frame_time_nanos);
    }

    /// Advance time by at least `nanos`, one frame at a time.
    pub fn advance_time(&mut self, nanos: u64) {
        let target = self.frame_time_nanos.saturating_add(nanos);
        while self.frame_time_nanos < target {
            self.advance_frame();
        }
    }

    /// Run frames until no animation is pending. Returns the number of
    /// frames run, or `None` if the viewer was still animating after the cap.
    pub fn wait_for_idle(&mut self) -> Option<usize> {
        for frame in 0..MAX_IDLE_FRAMES {
            if !self.clock.has_frame_callbacks() {
                return Some(frame);
            }
            self.advance_frame();
        }
        log::warn!("viewer still animating after {MAX_IDLE_FRAMES} frames");
        None
    }

    /// Press the pointer at the given viewport coordinates.
    pub fn press(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
        self.send(PointerEvent::down(x, y, self.frame_time_nanos));
    }

    /// Move the pressed pointer. Does nothing if no pointer is down.
    pub fn move_to(&mut self, x: f32, y: f32) {
        if self.pointer.is_none() {
            return;
        }
        self.pointer = Some((x, y));
        self.send(PointerEvent::moved(x, y, self.frame_time_nanos));
    }

    /// Lift the pointer where it last was.
    pub fn release(&mut self) {
        if let Some((x, y)) = self.pointer.take() {
            self.send(PointerEvent::up(x, y, self.frame_time_nanos));
        }
    }

    /// The platform takes the pointer away.
    pub fn cancel_pointer(&mut self) {
        if self.pointer.take().is_some() {
            self.send(PointerEvent::cancel(self.frame_time_nanos));
        }
    }

    /// Press at `from` and move to `to` in `steps` moves, one frame apart.
    /// The pointer stays down; follow with [`release`](Self::release).
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32, steps: u32) {
        self.press(from_x, from_y);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.advance_frame();
            self.move_to(from_x + (to_x - from_x) * t, from_y + (to_y - from_y) * t);
        }
    }

    /// Drag straight down by `distance` over `steps` frames, then release.
    pub fn swipe_down(&mut self, distance: f32, steps: u32) {
        let x = self.viewport.width / 2.0;
        let y = self.viewport.height * 0.1;
        self.drag(x, y, x, y + distance, steps);
        self.release();
    }

    /// Drag down by `distance`, hold still long enough to lose all
    /// momentum, then release.
    pub fn drag_and_hold(&mut self, distance: f32) {
        let x = self.viewport.width / 2.0;
        let y = self.viewport.height * 0.1;
        self.drag(x, y, x, y + distance, 10);
        self.advance_time(100_000_000);
        self.release();
    }

    fn send(&mut self, event: PointerEvent) {
        self.dispatcher.push(event);
        let viewer = &mut self.viewer;
        self.dispatcher
            .drain(|_, event| viewer.handle_pointer_event(&event));
    }
}

impl std::fmt::Debug for StoryTestRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryTestRule")
            .field("viewer", &self.viewer)
            .field("frame_time_nanos", &self.frame_time_nanos)
            .field("go_back_calls", &self.go_back_calls.get())
            .finish()
    }
}

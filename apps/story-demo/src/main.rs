use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use storyview_core::{FrameClock, FRAME_INTERVAL_NANOS};
use storyview_foundation::{PointerDispatcher, PointerEvent};
use storyview_ui::{StoryMedia, StoryViewer, StoryViewerOptions, ViewerPhase};
use web_time::Instant;

mod scenario;

use scenario::{Scenario, Step};

const VIEWPORT_HEIGHT: f32 = 800.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let requested = std::env::args().nth(1);
    let scenarios = scenario::select(requested.as_deref())?;

    println!("=== Story Viewer Demo ===");
    println!("Replaying {} scripted gesture(s) at 60 fps.", scenarios.len());
    println!("Set RUST_LOG=debug to see gesture decisions, trace for every frame.");
    println!();

    for scenario in &scenarios {
        run(scenario).with_context(|| format!("scenario '{}' failed", scenario.name))?;
    }
    Ok(())
}

fn run(scenario: &Scenario) -> Result<()> {
    log::info!("{}: {}", scenario.name, scenario.description);

    let story = StoryMedia::from_sources(
        scenario.name,
        Some("https://picsum.photos/seed/story/720/1280"),
        None,
    )
    .context("invalid story media")?;
    let clock = FrameClock::new();
    let go_back_calls = Rc::new(Cell::new(0usize));
    let calls = go_back_calls.clone();
    let viewer = StoryViewer::new(
        story,
        StoryViewerOptions::new(VIEWPORT_HEIGHT),
        clock.clone(),
        move || {
            calls.set(calls.get() + 1);
            log::info!("navigator: go back");
        },
    )
    .context("cannot mount story viewer")?;

    let mut player = Player::new(clock, viewer);
    for step in &scenario.steps {
        player.play(*step);
    }

    log::info!(
        "{} finished: phase {:?}, go_back called {} time(s), {} frames",
        scenario.name,
        player.viewer.phase(),
        go_back_calls.get(),
        player.frames
    );
    Ok(())
}

/// Drives a viewer in real time, one frame every frame interval.
struct Player {
    clock: FrameClock,
    viewer: StoryViewer,
    dispatcher: PointerDispatcher,
    started: Instant,
    frames: u64,
    pointer: (f32, f32),
}

impl Player {
    fn new(clock: FrameClock, viewer: StoryViewer) -> Self {
        Self {
            clock,
            viewer,
            dispatcher: PointerDispatcher::new(),
            started: Instant::now(),
            frames: 0,
            pointer: (0.0, 0.0),
        }
    }

    fn play(&mut self, step: Step) {
        match step {
            Step::Press { x, y } => {
                self.pointer = (x, y);
                let event = PointerEvent::down(x, y, self.uptime_nanos());
                self.dispatcher.push(event);
                self.frame();
            }
            Step::MoveTo { x, y, frames } => {
                let (from_x, from_y) = self.pointer;
                let frames = frames.max(1);
                for i in 1..=frames {
                    let t = i as f32 / frames as f32;
                    let position = (from_x + (x - from_x) * t, from_y + (y - from_y) * t);
                    self.pointer = position;
                    let event = PointerEvent::moved(position.0, position.1, self.uptime_nanos());
                    self.dispatcher.push(event);
                    self.frame();
                }
            }
            Step::Hold { frames } | Step::Idle { frames } => {
                for _ in 0..frames {
                    self.frame();
                }
            }
            Step::Release => {
                let (x, y) = self.pointer;
                let event = PointerEvent::up(x, y, self.uptime_nanos());
                self.dispatcher.push(event);
                self.frame();
            }
            Step::Cancel => {
                self.dispatcher.push(PointerEvent::cancel(self.uptime_nanos()));
                self.frame();
            }
        }
    }

    fn uptime_nanos(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Wait for the next frame deadline, deliver queued input, then animate.
    fn frame(&mut self) {
        self.frames += 1;
        let deadline = Duration::from_nanos(self.frames * FRAME_INTERVAL_NANOS);
        let elapsed = self.started.elapsed();
        if deadline > elapsed {
            std::thread::sleep(deadline - elapsed);
        }

        let viewer = &mut self.viewer;
        self.dispatcher
            .drain(|_, event| viewer.handle_pointer_event(&event));
        self.clock.drain_frame_callbacks(self.uptime_nanos());

        let frame = self.viewer.frame();
        log::trace!("frame {}: {:?}", self.frames, frame);
        if self.frames % 10 == 0 && self.viewer.phase() != ViewerPhase::Idle {
            log::info!(
                "{:?} y={:.1} scale={:.3} radius={:.1}",
                self.viewer.phase(),
                frame.transform.translate_y,
                frame.transform.scale,
                frame.corner_radius
            );
        }
    }
}

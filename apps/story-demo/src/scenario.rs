//! Scripted pointer gestures replayed by the demo.

use anyhow::{bail, Result};

/// One step of a scripted gesture, in viewport coordinates.
#[derive(Clone, Copy, Debug)]
pub enum Step {
    Press { x: f32, y: f32 },
    /// Glide to the point over the given number of frames.
    MoveTo { x: f32, y: f32, frames: u32 },
    /// Keep the pointer still for the given number of frames.
    Hold { frames: u32 },
    Release,
    Cancel,
    /// Let animations run for the given number of frames.
    Idle { frames: u32 },
}

#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub steps: Vec<Step>,
}

pub fn all() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "flick",
            description: "short fast flick downwards dismisses",
            steps: vec![
                Step::Press { x: 200.0, y: 120.0 },
                Step::MoveTo {
                    x: 205.0,
                    y: 260.0,
                    frames: 3,
                },
                Step::Release,
                Step::Idle { frames: 30 },
            ],
        },
        Scenario {
            name: "drag-dismiss",
            description: "slow drag past halfway dismisses",
            steps: vec![
                Step::Press { x: 200.0, y: 100.0 },
                Step::MoveTo {
                    x: 240.0,
                    y: 600.0,
                    frames: 40,
                },
                Step::Hold { frames: 10 },
                Step::Release,
                Step::Idle { frames: 30 },
            ],
        },
        Scenario {
            name: "drag-cancel",
            description: "slow drag short of halfway springs back",
            steps: vec![
                Step::Press { x: 200.0, y: 100.0 },
                Step::MoveTo {
                    x: 180.0,
                    y: 400.0,
                    frames: 30,
                },
                Step::Hold { frames: 10 },
                Step::Release,
                Step::Idle { frames: 180 },
            ],
        },
        Scenario {
            name: "fling-back",
            description: "long drag thrown back upwards springs back",
            steps: vec![
                Step::Press { x: 200.0, y: 100.0 },
                Step::MoveTo {
                    x: 200.0,
                    y: 700.0,
                    frames: 30,
                },
                Step::MoveTo {
                    x: 200.0,
                    y: 200.0,
                    frames: 4,
                },
                Step::Release,
                Step::Idle { frames: 180 },
            ],
        },
        Scenario {
            name: "interrupted",
            description: "the platform cancels the pointer mid-drag",
            steps: vec![
                Step::Press { x: 200.0, y: 100.0 },
                Step::MoveTo {
                    x: 200.0,
                    y: 650.0,
                    frames: 20,
                },
                Step::Cancel,
                Step::Idle { frames: 180 },
            ],
        },
    ]
}

/// Scenarios to run for an optional name; `None` or `"all"` runs everything.
pub fn select(name: Option<&str>) -> Result<Vec<Scenario>> {
    let scenarios = all();
    match name {
        None | Some("all") => Ok(scenarios),
        Some(name) => match scenarios.into_iter().find(|s| s.name == name) {
            Some(scenario) => Ok(vec![scenario]),
            None => {
                let known: Vec<&str> = all().iter().map(|s| s.name).collect();
                bail!("unknown scenario '{name}', expected one of: all, {}", known.join(", "))
            }
        },
    }
}

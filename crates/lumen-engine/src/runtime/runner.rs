use std::time::{Duration, Instant};

use anyhow::{ensure, Result};

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::input::{InputEvent, InputFrame, InputState};
use crate::time::FrameClock;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub viewport: Viewport,
    /// Simulated time between frames.
    pub frame_step: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "lumen".to_string(),
            viewport: Viewport::new(1280.0, 720.0),
            frame_step: Duration::from_micros(16_667),
        }
    }
}

/// Outcome of a [`Runtime::run`] call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RunSummary {
    /// Frames handed to the app.
    pub frames: u64,
    /// `true` when the app returned `AppControl::Exit` before the script ran out.
    pub exited_early: bool,
}

/// Entry point for the frame loop.
pub struct Runtime;

impl Runtime {
    /// Runs one frame per item of `frames`.
    ///
    /// For each frame: every event in the batch is applied to the input state
    /// in order, the clock advances by `frame_step`, `app.on_frame` runs, and
    /// the per-frame deltas are cleared.
    pub fn run<A, I>(config: RuntimeConfig, app: &mut A, frames: I) -> Result<RunSummary>
    where
        A: App,
        I: IntoIterator<Item = Vec<InputEvent>>,
    {
        ensure!(
            config.viewport.is_valid(),
            "invalid viewport {}x{} for '{}'",
            config.viewport.width,
            config.viewport.height,
            config.title
        );
        ensure!(!config.frame_step.is_zero(), "frame_step must be non-zero");

        log::info!(
            "starting '{}' ({}x{})",
            config.title,
            config.viewport.width,
            config.viewport.height
        );

        let mut input_state = InputState { focused: true, ..Default::default() };
        let mut input_frame = InputFrame::default();

        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let mut now = start;

        app.on_start(config.viewport);

        let mut summary = RunSummary { frames: 0, exited_early: false };

        for batch in frames {
            for ev in batch {
                input_state.apply_event(&mut input_frame, ev);
            }

            now += config.frame_step;
            let time = clock.tick_at(now);

            let control = {
                let mut ctx = FrameCtx {
                    viewport: config.viewport,
                    input: &input_state,
                    input_frame: &input_frame,
                    time,
                };
                app.on_frame(&mut ctx)
            };

            // Clear per-frame deltas after the frame is consumed.
            input_frame.clear();
            summary.frames += 1;

            if control == AppControl::Exit {
                log::info!("app requested exit after frame {}", time.frame_index);
                summary.exited_early = true;
                break;
            }
        }

        log::info!("'{}' finished after {} frames", config.title, summary.frames);
        Ok(summary)
    }
}

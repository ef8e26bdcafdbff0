//! Platform abstraction layer
//!
//! The core never talks to a window system directly. Each frame the driver
//! polls a `Lifecycle` for quit, clears the buffer, asks an `InputSource` for
//! a keyboard snapshot, ticks the game, draws, hands the finished buffer to a
//! `Presenter` and lets a `Pacer` wait out the rest of the frame.

pub mod headless;

pub use headless::{FixedDelay, FrameLimit, FrameRecorder, PpmSnapshot, ScriptedInput};

use crate::Error;
use crate::input::{KeyboardState, get_direction};
use crate::renderer::PixelBuffer;
use crate::sim::{GameState, TickEvents, TickInput, draw, tick};

/// Consumes one finished frame per tick
pub trait Presenter {
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Error>;

    /// Release whatever the presenter holds. Called once when the loop ends,
    /// also when it ends with an error.
    fn finish(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// Supplies the keyboard snapshot for the current frame
pub trait InputSource {
    fn keyboard_state(&mut self) -> KeyboardState;
}

/// Reports the quit signal, polled at the top of every frame
pub trait Lifecycle {
    fn quit_requested(&mut self) -> bool;
}

/// Frame tail pacing
pub trait Pacer {
    fn pace(&mut self);
}

/// Driver state. There is no failure state; errors end `run` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// Counters collected over a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub frames: u64,
    pub wall_bounces: u64,
    pub paddle_hits: u64,
    pub serves: u64,
}

impl RunSummary {
    fn record(&mut self, events: &TickEvents) {
        self.frames += 1;
        self.wall_bounces += events.wall_bounce as u64;
        self.paddle_hits += events.left_hit as u64 + events.right_hit as u64;
        self.serves += events.scored as u64;
    }
}

/// The set of collaborators a frame loop needs
pub struct Platform<I, L, P, D> {
    pub input: I,
    pub lifecycle: L,
    pub presenter: P,
    pub pacer: D,
}

impl<I, L, P, D> Platform<I, L, P, D>
where
    I: InputSource,
    L: Lifecycle,
    P: Presenter,
    D: Pacer,
{
    pub fn new(input: I, lifecycle: L, presenter: P, pacer: D) -> Self {
        Self {
            input,
            lifecycle,
            presenter,
            pacer,
        }
    }

    /// Run one frame: clear, input, update, draw, present, pace
    pub fn frame(
        &mut self,
        state: &mut GameState,
        buf: &mut PixelBuffer,
    ) -> Result<TickEvents, Error> {
        buf.clear();

        let keys = self.input.keyboard_state();
        let input = TickInput {
            direction: get_direction(&keys),
        };
        log::trace!("Input {:?}", input.direction);

        let events = tick(state, &input);
        if events.left_hit || events.right_hit || events.wall_bounce {
            log::debug!(
                "Tick {}: ball at ({:.1}, {:.1}) vel ({:.1}, {:.1}) {:?}",
                state.time_ticks,
                state.ball.pos.x,
                state.ball.pos.y,
                state.ball.vel.x,
                state.ball.vel.y,
                events
            );
        }

        draw(state, buf);
        self.presenter.present(buf)?;
        self.pacer.pace();
        Ok(events)
    }

    /// Loop until the lifecycle asks to quit, then release the presenter
    pub fn run(
        &mut self,
        state: &mut GameState,
        buf: &mut PixelBuffer,
    ) -> Result<RunSummary, Error> {
        log::info!("Frame loop starting ({}x{})", buf.width(), buf.height());
        let outcome = self.run_loop(state, buf);
        let released = self.presenter.finish();

        let summary = outcome?;
        released?;
        log::info!(
            "Frame loop terminated after {} frames ({} paddle hits, {} serves)",
            summary.frames,
            summary.paddle_hits,
            summary.serves
        );
        Ok(summary)
    }

    fn run_loop(
        &mut self,
        state: &mut GameState,
        buf: &mut PixelBuffer,
    ) -> Result<RunSummary, Error> {
        let mut summary = RunSummary::default();
        let mut run_state = RunState::Running;
        while run_state == RunState::Running {
            if self.lifecycle.quit_requested() {
                run_state = RunState::Terminated;
                continue;
            }
            let events = self.frame(state, buf)?;
            summary.record(&events);
        }
        Ok(summary)
    }
}

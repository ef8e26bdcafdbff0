//! Headless collaborators
//!
//! Enough platform to run the game without a window: a scripted keyboard, a
//! frame budget in place of a close button, a sleep-based pacer and
//! presenters that keep frames in memory or dump the last one as a PPM image.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use super::{InputSource, Lifecycle, Pacer, Presenter};
use crate::Error;
use crate::input::{Direction, KeyboardState, Scancode};
use crate::renderer::PixelBuffer;

/// Replays a fixed list of commands, one per frame, looping forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<Direction>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(script: Vec<Direction>) -> Self {
        Self { script, cursor: 0 }
    }

    /// No keys pressed, ever
    pub fn idle() -> Self {
        Self::default()
    }

    /// Parse a script string: `u`, `d`, `l`, `r` for arrows, anything else idles
    pub fn parse(script: &str) -> Self {
        let script = script
            .chars()
            .map(|c| match c.to_ascii_lowercase() {
                'u' => Direction::Up,
                'd' => Direction::Down,
                'l' => Direction::Left,
                'r' => Direction::Right,
                _ => Direction::None,
            })
            .collect();
        Self::new(script)
    }
}

fn scancode_for(direction: Direction) -> Option<Scancode> {
    match direction {
        Direction::Up => Some(Scancode::Up),
        Direction::Down => Some(Scancode::Down),
        Direction::Left => Some(Scancode::Left),
        Direction::Right => Some(Scancode::Right),
        Direction::None => None,
    }
}

impl InputSource for ScriptedInput {
    fn keyboard_state(&mut self) -> KeyboardState {
        if self.script.is_empty() {
            return KeyboardState::new();
        }
        let direction = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        match scancode_for(direction) {
            Some(code) => KeyboardState::with_pressed(&[code]),
            None => KeyboardState::new(),
        }
    }
}

/// Requests quit once a frame budget is used up
#[derive(Debug, Clone, Copy)]
pub struct FrameLimit {
    remaining: u64,
}

impl FrameLimit {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl Lifecycle for FrameLimit {
    fn quit_requested(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// Fixed sleep at the tail of every frame; no catch-up for slow frames
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Runs frames back to back
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }
}

impl Pacer for FixedDelay {
    fn pace(&mut self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

/// Keeps a copy of the last presented frame
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub presented: u64,
    pub last: Option<PixelBuffer>,
    pub finished: bool,
}

impl Presenter for FrameRecorder {
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Error> {
        self.presented += 1;
        self.last = Some(frame.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Error> {
        self.finished = true;
        Ok(())
    }
}

/// Writes the last presented frame to disk as a binary PPM when the loop ends
#[derive(Debug)]
pub struct PpmSnapshot {
    path: PathBuf,
    recorder: FrameRecorder,
}

impl PpmSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            recorder: FrameRecorder::default(),
        }
    }
}

impl Presenter for PpmSnapshot {
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Error> {
        self.recorder.present(frame)
    }

    fn finish(&mut self) -> Result<(), Error> {
        self.recorder.finish()?;
        let Some(frame) = &self.recorder.last else {
            log::warn!("No frame to write to {}", self.path.display());
            return Ok(());
        };
        let mut out = BufWriter::new(File::create(&self.path)?);
        write_ppm(frame, &mut out)?;
        out.flush()?;
        log::info!("Wrote snapshot to {}", self.path.display());
        Ok(())
    }
}

/// Encode a frame as binary PPM (P6), dropping the alpha byte
pub fn write_ppm<W: Write>(frame: &PixelBuffer, out: &mut W) -> Result<(), Error> {
    write!(out, "P6\n{} {}\n255\n", frame.width(), frame.height())?;
    for px in frame.as_bytes().chunks_exact(4) {
        out.write_all(&px[..3])?;
    }
    Ok(())
}

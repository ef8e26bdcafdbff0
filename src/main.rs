//! Pongo entry point
//!
//! Runs the game headless: a scripted keyboard drives the left paddle, the AI
//! drives the right one, and the last frame can be saved as a PPM image.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pongo::platform::{
    FixedDelay, FrameLimit, FrameRecorder, Platform, PpmSnapshot, ScriptedInput,
};
use pongo::sim::GameState;
use pongo::{PixelBuffer, Settings};

#[derive(Parser, Debug)]
#[command(version, about = "Two-paddle deflection game rendered into a pixel buffer")]
struct Args {
    /// JSON settings file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run before quitting
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Write the final frame to this path as a PPM image
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Skip the per-frame pacing sleep
    #[arg(long)]
    no_delay: bool,

    /// Repeating key script for the left paddle: u, d, l, r, or . for idle
    #[arg(long, default_value = ".")]
    script: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Pongo (native) starting...");

    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Settings::default(),
    };

    let mut state = GameState::new(&settings);
    let mut buf = PixelBuffer::new(settings.width, settings.height);
    let input = ScriptedInput::parse(&args.script);
    let lifecycle = FrameLimit::new(args.frames);

    let pacer = if args.no_delay {
        FixedDelay::none()
    } else {
        FixedDelay::from_millis(settings.frame_delay_ms)
    };

    let summary = match &args.snapshot {
        Some(path) => {
            let presenter = PpmSnapshot::new(path);
            Platform::new(input, lifecycle, presenter, pacer).run(&mut state, &mut buf)
        }
        None => {
            let presenter = FrameRecorder::default();
            Platform::new(input, lifecycle, presenter, pacer).run(&mut state, &mut buf)
        }
    }
    .context("frame loop failed")?;

    log::info!(
        "Done: {} frames, {} wall bounces, {} paddle hits, {} serves",
        summary.frames,
        summary.wall_bounces,
        summary.paddle_hits,
        summary.serves
    );
    Ok(())
}

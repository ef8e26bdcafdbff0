//! Pongo - a two-paddle deflection game drawn into a raw pixel buffer
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (paddles, ball, collisions, AI tracking)
//! - `renderer`: Software rasterizer writing into an RGBA byte buffer
//! - `input`: Keyboard snapshot to directional command mapping
//! - `platform`: Frame driver and the collaborators it talks to
//! - `settings`: Data-driven arena and entity configuration

pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::{Direction, KeyboardState, Scancode, get_direction};
pub use renderer::{Color, PixelBuffer};
pub use settings::{Rules, Settings};

/// Errors raised by the plumbing around the core.
///
/// Simulation and rasterization are total and never produce one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
    #[error("failed to present frame: {0}")]
    Present(String),
}

/// Game configuration defaults
pub mod consts {
    /// Arena dimensions in pixels
    pub const DEFAULT_WIDTH: u32 = 800;
    pub const DEFAULT_HEIGHT: u32 = 600;

    /// Bytes per pixel in the frame buffer (R, G, B, A)
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Pacing sleep at the tail of every frame (~60 fps)
    pub const FRAME_DELAY_MS: u64 = 16;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const LEFT_PADDLE_X: f32 = 100.0;
    pub const RIGHT_PADDLE_X: f32 = 700.0;
    pub const PADDLE_START_Y: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 20;
    pub const BALL_START_X: f32 = 300.0;
    pub const BALL_START_Y: f32 = 300.0;
    pub const BALL_START_VX: f32 = 10.0;
    pub const BALL_START_VY: f32 = 10.0;

    /// Where the ball is put back after leaving the arena sideways
    pub const SERVE_X: f32 = 300.0;
    pub const SERVE_Y: f32 = 300.0;
}

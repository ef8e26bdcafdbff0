//! Arena and entity configuration
//!
//! Loaded from JSON; every field has a default so partial files are valid.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::consts::*;
use crate::renderer::Color;

/// Opt-in gameplay changes. All off reproduces the classic behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Keep paddle centers within `[h/2, height - h/2]`
    pub clamp_paddles: bool,
    /// Bounce on `y - r < 0` or `y + r > height` instead of testing `y - r` twice
    pub split_wall_bounce: bool,
    /// Use a `±h/2` vertical hit band instead of `±h`
    pub match_collision_band: bool,
}

/// Paddle placement and look
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleConfig {
    pub x: f32,
    pub y: f32,
    pub w: i32,
    pub h: i32,
    pub color: Color,
}

impl PaddleConfig {
    fn at(x: f32) -> Self {
        Self {
            x,
            y: PADDLE_START_Y,
            w: PADDLE_WIDTH,
            h: PADDLE_HEIGHT,
            color: Color::WHITE,
        }
    }
}

/// Ball start state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallConfig {
    pub x: f32,
    pub y: f32,
    pub radius: i32,
    pub vx: f32,
    pub vy: f32,
    pub color: Color,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            x: BALL_START_X,
            y: BALL_START_Y,
            radius: BALL_RADIUS,
            vx: BALL_START_VX,
            vy: BALL_START_VY,
            color: Color::WHITE,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame size in pixels
    pub width: u32,
    pub height: u32,

    /// Human-controlled paddle
    pub left_paddle: PaddleConfig,
    /// AI-controlled paddle
    pub right_paddle: PaddleConfig,
    pub ball: BallConfig,

    /// Reset point after the ball leaves sideways
    pub serve_position: (f32, f32),

    /// Sleep at the end of every frame
    pub frame_delay_ms: u64,

    pub rules: Rules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            left_paddle: PaddleConfig::at(LEFT_PADDLE_X),
            right_paddle: PaddleConfig::at(RIGHT_PADDLE_X),
            ball: BallConfig::default(),
            serve_position: (SERVE_X, SERVE_Y),
            frame_delay_ms: FRAME_DELAY_MS,
            rules: Rules::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check entity invariants: positive frame, paddle and ball sizes
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Invalid(format!(
                "frame must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, paddle) in [("left", &self.left_paddle), ("right", &self.right_paddle)] {
            if paddle.w <= 0 || paddle.h <= 0 {
                return Err(Error::Invalid(format!(
                    "{} paddle size must be positive, got {}x{}",
                    name, paddle.w, paddle.h
                )));
            }
        }
        if self.ball.radius <= 0 {
            return Err(Error::Invalid(format!(
                "ball radius must be positive, got {}",
                self.ball.radius
            )));
        }
        Ok(())
    }

    pub fn serve_point(&self) -> Vec2 {
        Vec2::new(self.serve_position.0, self.serve_position.1)
    }
}

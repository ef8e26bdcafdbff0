//! Game state and entity types
//!
//! Paddles and the ball are created once from `Settings` and mutated in place
//! every frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{hits_left_paddle, hits_right_paddle, hits_wall, out_of_bounds};
use crate::input::Direction;
use crate::renderer::{Color, PixelBuffer, fill_circle, fill_rect};
use crate::settings::{BallConfig, PaddleConfig, Rules, Settings};

/// Playfield bounds and collision rules shared by every entity update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
    /// Where the ball goes after leaving sideways
    pub serve: Vec2,
    pub rules: Rules,
}

impl Arena {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            serve: settings.serve_point(),
            rules: settings.rules,
        }
    }
}

/// What happened to the ball during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    pub wall_bounce: bool,
    pub scored: bool,
    pub left_hit: bool,
    pub right_hit: bool,
}

/// A vertical paddle, positioned by its center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub w: i32,
    pub h: i32,
    pub color: Color,
}

impl Paddle {
    pub fn new(pos: Vec2, w: i32, h: i32, color: Color) -> Self {
        Self { pos, w, h, color }
    }

    pub fn from_config(config: &PaddleConfig) -> Self {
        let pos = Vec2::new(config.x, config.y);
        Self::new(pos, config.w, config.h, config.color)
    }

    /// Truncated half width, shared by drawing and the hit threshold
    #[inline]
    pub fn half_width(&self) -> f32 {
        (self.w / 2) as f32
    }

    /// Move one pixel per frame for Up/Down; every other command is ignored
    pub fn update(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.pos.y -= 1.0,
            Direction::Down => self.pos.y += 1.0,
            Direction::None | Direction::Left | Direction::Right => {}
        }
    }

    /// AI control: snap to the ball's height, no lag and no speed limit
    pub fn track(&mut self, ball: &Ball) {
        self.pos.y = ball.pos.y;
    }

    /// Keep the paddle's center within `[h/2, height - h/2]`
    pub fn clamp_to(&mut self, height: u32) {
        let half = (self.h / 2) as f32;
        let max = (height as f32 - half).max(half);
        self.pos.y = self.pos.y.clamp(half, max);
    }

    pub fn draw(&self, buf: &mut PixelBuffer) {
        fill_rect(
            buf,
            self.pos.x as i32,
            self.pos.y as i32,
            self.w,
            self.h,
            self.color,
        );
    }
}

/// The ball, positioned by its center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: i32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: i32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    pub fn from_config(config: &BallConfig) -> Self {
        Self::new(
            Vec2::new(config.x, config.y),
            Vec2::new(config.vx, config.vy),
            config.radius,
            config.color,
        )
    }

    /// Advance one frame: integrate, bounce off walls, serve again if out,
    /// then bounce off either paddle. The order matters and is fixed.
    pub fn update(&mut self, left: &Paddle, right: &Paddle, arena: &Arena) -> TickEvents {
        let mut events = TickEvents::default();
        let rules = arena.rules;

        self.pos += self.vel;

        let split = rules.split_wall_bounce;
        if hits_wall(self.pos.y, self.radius, arena.height, split) {
            self.vel.y = -self.vel.y;
            events.wall_bounce = true;
        }

        // Velocity survives the reset untouched
        if out_of_bounds(self.pos.x, self.radius, arena.width) {
            self.pos = arena.serve;
            events.scored = true;
        }

        if hits_left_paddle(self.pos, self.radius, left, rules.match_collision_band) {
            self.vel.x = -self.vel.x;
            events.left_hit = true;
        }

        if hits_right_paddle(self.pos, self.radius, right, rules.match_collision_band) {
            self.vel.x = -self.vel.x;
            events.right_hit = true;
        }

        events
    }

    pub fn draw(&self, buf: &mut PixelBuffer) {
        fill_circle(
            buf,
            self.pos.x as i32,
            self.pos.y as i32,
            self.radius,
            self.color,
        );
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    /// Human-controlled paddle
    pub left: Paddle,
    /// AI-controlled paddle
    pub right: Paddle,
    pub ball: Ball,
    /// Frames simulated so far
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            arena: Arena::from_settings(settings),
            left: Paddle::from_config(&settings.left_paddle),
            right: Paddle::from_config(&settings.right_paddle),
            ball: Ball::from_config(&settings.ball),
            time_ticks: 0,
        }
    }
}

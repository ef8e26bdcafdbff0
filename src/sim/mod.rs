//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - One tick per frame, no delta time
//! - Human paddle first, AI paddle second, ball last
//! - No platform dependencies; drawing goes through `renderer` only

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    hits_left_paddle, hits_right_paddle, hits_wall, in_vertical_band, out_of_bounds,
};
pub use state::{Arena, Ball, GameState, Paddle, TickEvents};
pub use tick::{TickInput, draw, tick};

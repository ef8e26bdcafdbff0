//! Collision predicates for the ball against walls and paddles
//!
//! These are one-sided threshold tests, not box intersections: a paddle is hit
//! as soon as the ball's left edge crosses the paddle's x threshold while the
//! ball center sits inside the paddle's vertical band. Nothing checks the far
//! side of the paddle and a fast ball can tunnel through it in one tick.

use glam::Vec2;

use super::state::Paddle;

/// Whether the ball should bounce off the top/bottom of the arena.
///
/// Classic mode tests `y - r` against both edges; `split` checks the bottom
/// edge with `y + r` instead.
#[inline]
pub fn hits_wall(y: f32, radius: i32, height: u32, split: bool) -> bool {
    let top = y - radius as f32;
    let bottom = if split { y + radius as f32 } else { top };
    top < 0.0 || bottom > height as f32
}

/// Whether the ball has left the arena sideways and should be served again
#[inline]
pub fn out_of_bounds(x: f32, radius: i32, width: u32) -> bool {
    let edge = x + radius as f32;
    edge < 0.0 || edge > width as f32
}

/// Whether `y` lies strictly inside the paddle's vertical hit band.
///
/// The band is `±h` around the paddle center (twice the drawn height), or
/// `±h/2` when `matched` is set.
#[inline]
pub fn in_vertical_band(y: f32, paddle: &Paddle, matched: bool) -> bool {
    let reach = (if matched { paddle.h / 2 } else { paddle.h }) as f32;
    y > paddle.pos.y - reach && y < paddle.pos.y + reach
}

/// Left paddle: ball's left edge is left of the paddle's right face
#[inline]
pub fn hits_left_paddle(pos: Vec2, radius: i32, paddle: &Paddle, matched: bool) -> bool {
    pos.x - (radius as f32) < paddle.pos.x + paddle.half_width()
        && in_vertical_band(pos.y, paddle, matched)
}

/// Right paddle: ball's left edge is right of the paddle's right face
#[inline]
pub fn hits_right_paddle(pos: Vec2, radius: i32, paddle: &Paddle, matched: bool) -> bool {
    pos.x - (radius as f32) > paddle.pos.x + paddle.half_width()
        && in_vertical_band(pos.y, paddle, matched)
}

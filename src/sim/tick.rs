//! Per-frame simulation step
//!
//! One call to `tick` is one frame: human paddle, AI paddle, then the ball.

use super::state::{GameState, TickEvents};
use crate::input::Direction;
use crate::renderer::PixelBuffer;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Command for the human (left) paddle
    pub direction: Direction,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let clamp = state.arena.rules.clamp_paddles;
    state.time_ticks += 1;

    state.left.update(input.direction);
    if clamp {
        state.left.clamp_to(state.arena.height);
    }

    // AI reads the ball before it moves this frame
    state.right.track(&state.ball);
    if clamp {
        state.right.clamp_to(state.arena.height);
    }

    let events = state.ball.update(&state.left, &state.right, &state.arena);
    if events.scored {
        log::debug!("Ball served again at tick {}", state.time_ticks);
    }
    events
}

/// Draw both paddles, then the ball. The caller clears the buffer first.
pub fn draw(state: &GameState, buf: &mut PixelBuffer) {
    state.left.draw(buf);
    state.right.draw(buf);
    state.ball.draw(buf);
}

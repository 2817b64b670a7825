//! Fixed-step simulation tick
//!
//! One tick: advance the ball, resolve a corner hit, run the boundary check,
//! then test for a cleared field.

use serde::{Deserialize, Serialize};

use super::collision::{BoundaryHit, CornerHit, Wall, boundary_check, corner_collision};
use super::rng::Randomness;
use super::state::{GameEvent, GamePhase, GameState};

/// Player input, delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer dragged to (x, y) in field coordinates
    PointerMoved { x: f64, y: f64 },
    /// Click/tap: start a turn while idle
    Launch,
}

/// Apply one input event to the session
pub fn apply_input(state: &mut GameState, input: &InputEvent, rng: &mut impl Randomness) {
    match *input {
        InputEvent::PointerMoved { x, .. } => state.move_paddle(x),
        InputEvent::Launch => {
            if state.phase == GamePhase::Idle {
                state.start_turn(rng);
            }
        }
    }
}

/// Advance the session by one tick. Does nothing unless the ball is in play.
pub fn tick(state: &mut GameState, rng: &mut impl Randomness) {
    if state.phase != GamePhase::Active {
        return;
    }
    state.time_ticks += 1;

    state.ball.advance();
    state.registry.move_to(state.ball.shape, state.ball.pos);

    match corner_collision(&state.ball, &state.registry) {
        Some(CornerHit::Paddle { corner }) => {
            log::trace!("Paddle hit at {:?} corner", corner);
            state.ball.reflect_vertical();
            state.push_event(GameEvent::PaddleHit);
        }
        Some(CornerHit::Brick { corner, shape }) => {
            if let Some(brick) = state.bricks.remove(&mut state.registry, shape) {
                log::debug!(
                    "Brick ({}, {}) destroyed by {:?} corner, {} left",
                    brick.row,
                    brick.col,
                    corner,
                    state.bricks.len()
                );
                state.push_event(GameEvent::BrickDestroyed {
                    shape,
                    row: brick.row,
                    col: brick.col,
                });
            }
            state.ball.reflect_vertical();
        }
        None => {}
    }

    match boundary_check(&state.ball, state.config.field_width, state.config.field_height) {
        Some(BoundaryHit::Wall(wall)) => {
            match wall {
                Wall::Left | Wall::Right => state.ball.reflect_horizontal(),
                Wall::Top => state.ball.reflect_vertical(),
            }
            log::trace!("Wall bounce: {:?}", wall);
            state.push_event(GameEvent::WallBounce(wall));
        }
        // A cleared field wins even if the ball drops out on the same tick
        Some(BoundaryHit::Floor) if !state.bricks.is_empty() => state.lose_turn(rng),
        Some(BoundaryHit::Floor) | None => {}
    }

    if state.bricks.is_empty() {
        state.finish(GamePhase::Won);
    }
}

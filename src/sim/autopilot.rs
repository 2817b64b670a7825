//! Demo mode: plays the game without a human
//!
//! Launches whenever the session is idle and keeps the paddle under the
//! ball, leading it slightly in the direction it travels.

use super::state::{GamePhase, GameState};
use super::tick::InputEvent;

/// Ticks of horizontal travel to lead the ball by
const LEAD_TICKS: f64 = 4.0;

/// Input the autopilot would give for the current state
pub fn steer(state: &GameState) -> Option<InputEvent> {
    match state.phase {
        GamePhase::Idle => Some(InputEvent::Launch),
        GamePhase::Active => {
            let target = state.ball.center() + state.ball.vel * LEAD_TICKS;
            Some(InputEvent::PointerMoved {
                x: target.x,
                y: state.paddle.rect.top(),
            })
        }
        GamePhase::Won | GamePhase::Lost => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::rng::seeded;
    use crate::sim::tick::{apply_input, tick};

    #[test]
    fn test_launches_when_idle() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(steer(&state), Some(InputEvent::Launch));
    }

    #[test]
    fn test_tracks_ball() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = seeded(3);
        apply_input(&mut state, &InputEvent::Launch, &mut rng);
        match steer(&state) {
            Some(InputEvent::PointerMoved { x, .. }) => {
                assert!((x - (200.0 + state.ball.vel.x * LEAD_TICKS)).abs() < 1e-9);
            }
            other => panic!("expected pointer move, got {:?}", other),
        }
    }

    #[test]
    fn test_keeps_ball_in_play_for_a_while() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = seeded(77);
        for _ in 0..2_000 {
            if let Some(input) = steer(&state) {
                apply_input(&mut state, &input, &mut rng);
            }
            tick(&mut state, &mut rng);
        }
        assert!(state.bricks.len() < 100, "autopilot never reached a brick");
    }
}

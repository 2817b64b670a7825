use glam::DVec2;
use proptest::prelude::*;

use brick_breaker::GameConfig;
use brick_breaker::sim::autopilot;
use brick_breaker::sim::{
    GameEvent, GamePhase, GameState, Paddle, ShapeId, Wall, apply_input, seeded, tick,
};

proptest! {
    #[test]
    fn test_paddle_moves_only_when_fully_inside(start in 30.0f64..=370.0, pointer in -200.0f64..600.0) {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(ShapeId(0), &config);
        paddle.on_pointer_move(start);
        let before = paddle.rect;

        let moved = paddle.on_pointer_move(pointer);

        let half = config.paddle_width / 2.0;
        if pointer - half < 0.0 || pointer + half > config.field_width {
            prop_assert!(!moved);
            prop_assert_eq!(paddle.rect, before);
        } else {
            prop_assert!(moved);
            prop_assert_eq!(paddle.rect.left(), pointer - half);
            prop_assert_eq!(paddle.rect.top(), before.top());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_ticks_respect_session_invariants(seed in any::<u64>(), ticks in 100usize..3_000) {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = seeded(seed);
        let mut speed_x = None;

        for _ in 0..ticks {
            if let Some(input) = autopilot::steer(&state) {
                apply_input(&mut state, &input, &mut rng);
            }
            let launched = state.drain_events().iter().any(|e| matches!(e, GameEvent::Launched { .. }));
            if launched {
                speed_x = Some(state.ball.vel.x.abs());
            }

            let bricks_before = state.bricks.len();
            let vel_before = state.ball.vel;
            tick(&mut state, &mut rng);
            let events = state.drain_events();

            let corner_hits = events
                .iter()
                .filter(|e| matches!(e, GameEvent::PaddleHit | GameEvent::BrickDestroyed { .. }))
                .count();
            let boundary_hits = events
                .iter()
                .filter(|e| matches!(e, GameEvent::WallBounce(_) | GameEvent::TurnLost { .. }))
                .count();
            prop_assert!(corner_hits <= 1);
            prop_assert!(boundary_hits <= 1);

            // Bricks only ever go away, one per destroy event
            let destroyed = events
                .iter()
                .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                .count();
            prop_assert!(state.bricks.len() <= bricks_before);
            prop_assert_eq!(bricks_before - state.bricks.len(), destroyed);

            // Horizontal velocity flips only on side walls and keeps its magnitude
            let side_bounce = events
                .iter()
                .any(|e| matches!(e, GameEvent::WallBounce(Wall::Left | Wall::Right)));
            let turn_lost = events.iter().any(|e| matches!(e, GameEvent::TurnLost { .. }));
            if !turn_lost && vel_before != DVec2::ZERO {
                if side_bounce {
                    prop_assert_eq!(state.ball.vel.x, -vel_before.x);
                } else {
                    prop_assert_eq!(state.ball.vel.x, vel_before.x);
                }
                prop_assert_eq!(state.ball.vel.y.abs(), vel_before.y.abs());
                if let Some(speed) = speed_x {
                    prop_assert_eq!(state.ball.vel.x.abs(), speed);
                }
            }

            // Terminal conditions are exact
            prop_assert!(state.attempts_used <= state.config.max_attempts);
            match state.phase {
                GamePhase::Won => {
                    prop_assert!(state.bricks.is_empty());
                }
                GamePhase::Lost => {
                    prop_assert_eq!(state.attempts_used, state.config.max_attempts);
                }
                GamePhase::Idle | GamePhase::Active => {
                    prop_assert!(!state.bricks.is_empty());
                }
            }
            if state.phase.is_terminal() {
                break;
            }
        }
    }
}

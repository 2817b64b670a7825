//! Session state and turn sequencing
//!
//! A session moves through `Idle -> Active -> (Idle -> Active)* -> Won | Lost`.
//! Idle waits for a launch input; Active is the tick loop; Won and Lost are
//! terminal and ignore everything afterwards.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::{BrickField, GridLayout};
use super::collision::Wall;
use super::paddle::Paddle;
use super::rng::Randomness;
use super::shape::{Body, ShapeId, ShapeKind, ShapeRegistry};
use crate::config::GameConfig;

/// Ball and paddle fill
pub const BODY_FILL: [u8; 3] = [0, 0, 0];

/// Message shown when all bricks are gone
pub const WIN_MESSAGE: &str = "You win";
/// Message shown when every attempt is used up
pub const LOSE_MESSAGE: &str = "You lose";

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting at the center, waiting for launch input
    Idle,
    /// Ball in motion
    Active,
    /// All bricks destroyed
    Won,
    /// All attempts used
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Something observable that happened during input handling or a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball launched with this velocity
    Launched { vel: DVec2 },
    PaddleMoved { x: f64 },
    PaddleHit,
    BrickDestroyed { shape: ShapeId, row: u32, col: u32 },
    WallBounce(Wall),
    /// Ball fell out; `old_ball` was replaced by `new_ball`
    TurnLost {
        attempts_used: u32,
        old_ball: ShapeId,
        new_ball: ShapeId,
    },
    Won,
    Lost,
}

/// Compact end-of-session report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub phase: GamePhase,
    pub ticks: u64,
    pub attempts_used: u32,
    pub max_attempts: u32,
    pub bricks_left: usize,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Turns lost so far
    pub attempts_used: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Every body on the field, for point queries
    pub registry: ShapeRegistry,
    pub bricks: BrickField,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Events since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Lay out the field and wait for the first launch
    pub fn new(config: GameConfig) -> Self {
        let mut registry = ShapeRegistry::new();

        let paddle_rect = Paddle::initial_rect(&config);
        let paddle_id = registry.add(ShapeKind::Paddle, Body::Rect(paddle_rect), BODY_FILL);
        let paddle = Paddle::new(paddle_id, &config);

        let ball = Self::spawn_ball(&mut registry, &config);
        let bricks = BrickField::build(&mut registry, &GridLayout::from_config(&config));

        log::info!(
            "New session: {} bricks, {} attempts",
            bricks.len(),
            config.max_attempts
        );

        Self {
            config,
            phase: GamePhase::Idle,
            attempts_used: 0,
            time_ticks: 0,
            registry,
            bricks,
            paddle,
            ball,
            events: Vec::new(),
        }
    }

    fn spawn_ball(registry: &mut ShapeRegistry, config: &GameConfig) -> Ball {
        // Register with a placeholder origin, then center through Ball::reset
        let id = registry.add(
            ShapeKind::Ball,
            Body::Circle {
                origin: DVec2::ZERO,
                radius: config.ball_radius,
            },
            BODY_FILL,
        );
        let ball = Ball::centered(id, config);
        registry.move_to(id, ball.pos);
        ball
    }

    /// Attempts still available
    pub fn attempts_left(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.attempts_used)
    }

    /// Start a turn: launch the ball, or end the session if no attempts remain
    pub fn start_turn(&mut self, rng: &mut impl Randomness) {
        if self.phase.is_terminal() {
            return;
        }
        if self.attempts_used >= self.config.max_attempts {
            self.finish(GamePhase::Lost);
            return;
        }
        self.ball.launch(rng, &self.config);
        self.phase = GamePhase::Active;
        log::debug!(
            "Turn {} launched with velocity ({:.3}, {:.3})",
            self.attempts_used + 1,
            self.ball.vel.x,
            self.ball.vel.y
        );
        self.events.push(GameEvent::Launched { vel: self.ball.vel });
    }

    /// Move the paddle under the pointer. Ignored once the session is over.
    pub fn move_paddle(&mut self, pointer_x: f64) {
        if self.phase.is_terminal() {
            return;
        }
        if self.paddle.on_pointer_move(pointer_x) {
            self.registry.move_to(self.paddle.shape, self.paddle.origin());
            self.events.push(GameEvent::PaddleMoved {
                x: self.paddle.rect.left(),
            });
        }
    }

    /// Ball fell past the floor: count the attempt, put a fresh ball in the
    /// center and try to start the next turn. Only valid while the ball is in
    /// play.
    pub fn lose_turn(&mut self, rng: &mut impl Randomness) {
        if self.phase != GamePhase::Active {
            return;
        }
        self.attempts_used += 1;

        let old_ball = self.ball.shape;
        self.registry.remove(old_ball);
        self.ball = Self::spawn_ball(&mut self.registry, &self.config);

        log::debug!(
            "Turn lost ({}/{} attempts used)",
            self.attempts_used,
            self.config.max_attempts
        );
        self.events.push(GameEvent::TurnLost {
            attempts_used: self.attempts_used,
            old_ball,
            new_ball: self.ball.shape,
        });

        if self.attempts_used >= self.config.max_attempts {
            self.finish(GamePhase::Lost);
        } else if self.config.auto_relaunch {
            self.start_turn(rng);
        } else {
            self.phase = GamePhase::Idle;
        }
    }

    /// Enter a terminal phase
    pub fn finish(&mut self, phase: GamePhase) {
        debug_assert!(phase.is_terminal());
        if self.phase.is_terminal() {
            return;
        }
        self.phase = phase;
        let event = match phase {
            GamePhase::Won => GameEvent::Won,
            _ => GameEvent::Lost,
        };
        log::info!(
            "Session over: {:?} after {} ticks, {} bricks left",
            phase,
            self.time_ticks,
            self.bricks.len()
        );
        self.events.push(event);
    }

    /// Message for a terminal phase
    pub fn end_message(&self) -> Option<&'static str> {
        match self.phase {
            GamePhase::Won => Some(WIN_MESSAGE),
            GamePhase::Lost => Some(LOSE_MESSAGE),
            _ => None,
        }
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            phase: self.phase,
            ticks: self.time_ticks,
            attempts_used: self.attempts_used,
            max_attempts: self.config.max_attempts,
            bricks_left: self.bricks.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::seeded;

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.bricks.len(), 100);
        // bricks + paddle + ball
        assert_eq!(state.registry.len(), 102);
        assert_eq!(state.ball.pos, DVec2::new(190.0, 290.0));
        assert!(!state.ball.is_moving());
        assert_eq!(state.attempts_left(), 3);
    }

    #[test]
    fn test_start_turn_launches() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = seeded(5);
        state.start_turn(&mut rng);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.ball.vel.y, 3.0);
        assert!(matches!(state.drain_events().as_slice(), [GameEvent::Launched { .. }]));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_lose_turn_waits_for_launch() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = seeded(5);
        state.start_turn(&mut rng);
        let old_ball = state.ball.shape;

        state.lose_turn(&mut rng);
        assert_eq!(state.attempts_used, 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_ne!(state.ball.shape, old_ball);
        assert!(state.registry.get(old_ball).is_none());
        assert_eq!(state.ball.pos, DVec2::new(190.0, 290.0));
        assert_eq!(state.ball.vel, DVec2::ZERO);
    }

    #[test]
    fn test_auto_relaunch_restarts_turn() {
        let config = GameConfig {
            auto_relaunch: true,
            ..Default::default()
        };
        let mut state = GameState::new(config);
        let mut rng = seeded(5);
        state.start_turn(&mut rng);
        state.lose_turn(&mut rng);
        assert_eq!(state.phase, GamePhase::Active);
        assert!(state.ball.is_moving());
    }

    #[test]
    fn test_last_attempt_loses() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = seeded(5);
        state.attempts_used = 2;
        state.start_turn(&mut rng);
        state.drain_events();

        state.lose_turn(&mut rng);
        assert_eq!(state.attempts_used, 3);
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.ball.vel, DVec2::ZERO);
        assert_eq!(state.end_message(), Some(LOSE_MESSAGE));

        let events = state.drain_events();
        assert!(matches!(events[0], GameEvent::TurnLost { attempts_used: 3, .. }));
        assert_eq!(events[1], GameEvent::Lost);

        // Terminal: launch and pointer input are ignored
        state.start_turn(&mut rng);
        state.move_paddle(100.0);
        assert_eq!(state.phase, GamePhase::Lost);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_lose_turn_needs_ball_in_play() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = seeded(5);

        // Idle: no ball in play, nothing to lose
        state.lose_turn(&mut rng);
        assert_eq!(state.attempts_used, 0);
        assert_eq!(state.phase, GamePhase::Idle);

        for _ in 0..3 {
            state.start_turn(&mut rng);
            state.lose_turn(&mut rng);
        }
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.attempts_used, 3);
        state.drain_events();

        // Lost: attempts stay capped
        state.lose_turn(&mut rng);
        assert_eq!(state.attempts_used, state.config.max_attempts);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_move_paddle_updates_registry() {
        let mut state = GameState::new(GameConfig::default());
        state.move_paddle(100.0);
        let shape = state.registry.get(state.paddle.shape).unwrap();
        assert_eq!(shape.body.origin(), DVec2::new(70.0, 560.0));
        assert_eq!(state.drain_events(), vec![GameEvent::PaddleMoved { x: 70.0 }]);

        // Rejected move records nothing
        state.move_paddle(5.0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_summary_serializes() {
        let state = GameState::new(GameConfig::default());
        let json = serde_json::to_string(&state.summary()).unwrap();
        assert!(json.contains("\"bricks_left\":100"));
        assert!(json.contains("\"phase\":\"Idle\""));
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Randomness only through the `Randomness` seam
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod ball;
pub mod bricks;
pub mod collision;
pub mod paddle;
pub mod rng;
pub mod shape;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bricks::{Brick, BrickColor, BrickField, GridLayout};
pub use collision::{BoundaryHit, Corner, CornerHit, Wall, boundary_check, corner_collision};
pub use paddle::Paddle;
pub use rng::{Randomness, seeded};
pub use shape::{Body, Rect, Shape, ShapeId, ShapeKind, ShapeRegistry};
pub use state::{GameEvent, GamePhase, GameState, LOSE_MESSAGE, SessionSummary, WIN_MESSAGE};
pub use tick::{InputEvent, apply_input, tick};

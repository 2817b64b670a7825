//! Ball motion
//!
//! Position is the top-left corner of the ball's bounding box; velocity is in
//! pixels per tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rng::Randomness;
use super::shape::ShapeId;
use crate::config::GameConfig;

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Handle of the ball's body in the shape registry
    pub shape: ShapeId,
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Ball {
    /// New ball resting at the center of the field
    pub fn centered(shape: ShapeId, config: &GameConfig) -> Self {
        let mut ball = Self {
            shape,
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            radius: config.ball_radius,
        };
        ball.reset(config);
        ball
    }

    /// Move by one tick of velocity. No bounds checking.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn reflect_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    #[inline]
    pub fn reflect_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Center on the field and stop
    pub fn reset(&mut self, config: &GameConfig) {
        self.pos = DVec2::new(
            config.field_width / 2.0 - self.radius,
            config.field_height / 2.0 - self.radius,
        );
        self.vel = DVec2::ZERO;
    }

    /// Pick a fresh downward direction with a random horizontal component
    pub fn launch(&mut self, rng: &mut impl Randomness, config: &GameConfig) {
        let mut vx = rng.uniform(config.launch_vx_min, config.launch_vx_max);
        if rng.coin_flip() {
            vx = -vx;
        }
        self.vel = DVec2::new(vx, config.launch_vy);
    }

    /// Diameter, the side of the bounding box
    #[inline]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Bounding box center
    #[inline]
    pub fn center(&self) -> DVec2 {
        self.pos + DVec2::splat(self.radius)
    }

    /// Whether the ball has been launched this turn
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.vel != DVec2::ZERO
    }
}

//! The player's paddle
//!
//! Only the horizontal position moves. Pointer updates that would push any
//! part of the paddle outside the field are dropped, so a fast drag past an
//! edge leaves the paddle at its last valid spot instead of snapping to it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::shape::{Rect, ShapeId};
use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub shape: ShapeId,
    pub rect: Rect,
    /// Right edge limit for the paddle
    field_width: f64,
}

impl Paddle {
    /// Paddle centered horizontally, `paddle_y_offset` above the bottom edge
    pub fn new(shape: ShapeId, config: &GameConfig) -> Self {
        Self {
            shape,
            rect: Self::initial_rect(config),
            field_width: config.field_width,
        }
    }

    pub fn initial_rect(config: &GameConfig) -> Rect {
        Rect::new(
            config.field_width / 2.0 - config.paddle_width / 2.0,
            config.field_height - config.paddle_y_offset - config.paddle_height,
            config.paddle_width,
            config.paddle_height,
        )
    }

    /// Center the paddle on the pointer if it stays inside the field.
    ///
    /// Returns true when the position changed.
    pub fn on_pointer_move(&mut self, pointer_x: f64) -> bool {
        let left = pointer_x - self.rect.size.x / 2.0;
        if left < 0.0 || left + self.rect.size.x > self.field_width {
            return false;
        }
        self.rect.origin.x = left;
        true
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        self.rect.origin
    }
}

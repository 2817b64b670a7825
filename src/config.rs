//! Game configuration
//!
//! Values are fixed at build time (see [`crate::consts`]); `GameConfig` only
//! gathers them in one place so the simulation can be exercised with other
//! field or grid sizes.

use std::time::Duration;

use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::brick_width_for;
use crate::consts::*;

/// Full configuration for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,

    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_y_offset: f64,

    pub brick_rows: u32,
    pub bricks_per_row: u32,
    pub brick_sep: f64,
    pub brick_height: f64,
    pub brick_y_offset: f64,

    pub ball_radius: f64,
    pub launch_vy: f64,
    pub launch_vx_min: f64,
    pub launch_vx_max: f64,

    pub max_attempts: u32,
    pub pause_ms: u64,

    /// Start the next turn without waiting for a launch input after a turn is
    /// lost. Off by default: every turn needs its own launch.
    #[serde(default)]
    pub auto_relaunch: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y_offset: PADDLE_Y_OFFSET,

            brick_rows: BRICK_ROWS,
            bricks_per_row: BRICKS_PER_ROW,
            brick_sep: BRICK_SEP,
            brick_height: BRICK_HEIGHT,
            brick_y_offset: BRICK_Y_OFFSET,

            ball_radius: BALL_RADIUS,
            launch_vy: LAUNCH_VY,
            launch_vx_min: LAUNCH_VX_MIN,
            launch_vx_max: LAUNCH_VX_MAX,

            max_attempts: MAX_ATTEMPTS,
            pause_ms: PAUSE_MS,

            auto_relaunch: false,
        }
    }
}

impl GameConfig {
    /// Brick width derived from the field width and grid
    pub fn brick_width(&self) -> f64 {
        brick_width_for(self.field_width, self.bricks_per_row, self.brick_sep)
    }

    /// Inter-tick pause
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Reject setups that cannot produce a playable field
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.field_width > 0.0 && self.field_height > 0.0,
            "field must have a positive size, got {}x{}",
            self.field_width,
            self.field_height
        );
        ensure!(
            self.paddle_width > 0.0 && self.paddle_width <= self.field_width,
            "paddle width {} does not fit a field {} wide",
            self.paddle_width,
            self.field_width
        );
        ensure!(self.ball_radius > 0.0, "ball radius must be positive");
        ensure!(self.max_attempts > 0, "at least one attempt is required");
        ensure!(
            self.launch_vx_min < self.launch_vx_max,
            "empty launch range [{}, {})",
            self.launch_vx_min,
            self.launch_vx_max
        );

        if self.bricks_per_row > 0 && self.brick_rows > 0 {
            let width = self.brick_width();
            ensure!(width > 0.0, "bricks collapse to zero width");
            let row_span = self.bricks_per_row as f64 * width
                + (self.bricks_per_row - 1) as f64 * self.brick_sep;
            if row_span > self.field_width {
                bail!(
                    "brick row spans {} but the field is only {} wide",
                    row_span,
                    self.field_width
                );
            }
            let bottom = self.brick_y_offset
                + self.brick_rows as f64 * (self.brick_height + self.brick_sep);
            ensure!(
                bottom < self.field_height - self.paddle_y_offset - self.paddle_height,
                "brick grid reaches the paddle line"
            );
        }
        Ok(())
    }
}

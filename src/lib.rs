//! Brick Breaker - a single-screen Breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, session state)
//! - `platform`: Collaborator traits (surface, input, pacing) and the session driver
//! - `config`: Compiled-in game configuration

pub mod config;
pub mod platform;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Field dimensions (pixels)
    pub const FIELD_WIDTH: f64 = 400.0;
    pub const FIELD_HEIGHT: f64 = 600.0;

    /// Paddle size
    pub const PADDLE_WIDTH: f64 = 60.0;
    pub const PADDLE_HEIGHT: f64 = 10.0;
    /// Offset of the paddle up from the bottom
    pub const PADDLE_Y_OFFSET: f64 = 30.0;

    /// Brick grid
    pub const BRICKS_PER_ROW: u32 = 10;
    pub const BRICK_ROWS: u32 = 10;
    pub const BRICK_SEP: f64 = 4.0;
    pub const BRICK_HEIGHT: f64 = 8.0;
    /// Offset of the top brick row from the top
    pub const BRICK_Y_OFFSET: f64 = 70.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    /// Vertical speed on launch (pixels per tick, downward)
    pub const LAUNCH_VY: f64 = 3.0;
    /// Horizontal launch speed is drawn from [MIN, MAX)
    pub const LAUNCH_VX_MIN: f64 = 1.0;
    pub const LAUNCH_VX_MAX: f64 = 3.0;

    /// Attempts per session
    pub const MAX_ATTEMPTS: u32 = 3;
    /// Pause between ticks (milliseconds)
    pub const PAUSE_MS: u64 = 10;
}

/// Width of one brick so that a full row plus separators spans the field.
///
/// Integer division, so a row may fall a few pixels short of the field and is
/// then centered.
#[inline]
pub fn brick_width_for(field_width: f64, per_row: u32, sep: f64) -> f64 {
    if per_row == 0 {
        return 0.0;
    }
    let gaps = (per_row - 1) as f64 * sep;
    ((field_width - gaps) / per_row as f64).floor()
}

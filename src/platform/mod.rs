//! Platform abstraction layer
//!
//! The simulation never touches a window, an input device or a clock. Those
//! are collaborators behind the traits in this module:
//! - `surface`: field, shapes and text on screen
//! - `input`: launch signal and pointer movement
//! - `time`: pause between ticks
//!
//! `runner` drives a session against any combination of them.

pub mod input;
pub mod runner;
pub mod surface;
pub mod time;

pub use input::InputSource;
pub use runner::{RunOptions, RunOutcome, run_session};
pub use surface::{HeadlessSurface, Surface};
pub use time::{NoPause, Pacer, ThreadSleep};

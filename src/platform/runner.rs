//! Session driver
//!
//! Runs one session to completion against the platform collaborators:
//! block for a launch while idle, tick with a fixed pause while the ball is
//! in play, and mirror every simulation change onto the surface.

use anyhow::{Result, bail};

use super::input::InputSource;
use super::surface::Surface;
use super::time::Pacer;
use crate::sim::autopilot;
use crate::sim::{GameEvent, GamePhase, GameState, Randomness, SessionSummary, apply_input, tick};

/// Driver options
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop after this many ticks even if the session is not over
    pub max_ticks: Option<u64>,
    /// Let the autopilot launch and steer
    pub autopilot: bool,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The session reached Won or Lost
    Finished(SessionSummary),
    /// `max_ticks` ran out first
    Stopped(SessionSummary),
}

impl RunOutcome {
    pub fn summary(&self) -> &SessionSummary {
        match self {
            RunOutcome::Finished(summary) | RunOutcome::Stopped(summary) => summary,
        }
    }
}

/// Drive `state` until it ends or the tick budget runs out.
///
/// Fails only if the input source closes while the session is waiting for a
/// launch.
pub fn run_session(
    state: &mut GameState,
    surface: &mut impl Surface,
    input: &mut impl InputSource,
    pacer: &mut impl Pacer,
    rng: &mut impl Randomness,
    options: &RunOptions,
) -> Result<RunOutcome> {
    surface.create_field(state.config.field_width, state.config.field_height);
    for shape in state.registry.iter() {
        surface.add_shape(shape);
    }
    let pause = state.config.pause();

    loop {
        sync_surface(state, surface);

        if state.phase.is_terminal() {
            return Ok(RunOutcome::Finished(state.summary()));
        }
        if options.max_ticks.is_some_and(|max| state.time_ticks >= max) {
            log::info!("Stopping after {} ticks", state.time_ticks);
            return Ok(RunOutcome::Stopped(state.summary()));
        }

        match state.phase {
            GamePhase::Idle => {
                let event = if options.autopilot {
                    autopilot::steer(state)
                } else {
                    input.wait_event()
                };
                match event {
                    Some(event) => apply_input(state, &event, rng),
                    None => bail!("input closed while waiting for launch"),
                }
            }
            GamePhase::Active => {
                while let Some(event) = input.poll_event() {
                    apply_input(state, &event, rng);
                }
                if options.autopilot {
                    if let Some(event) = autopilot::steer(state) {
                        apply_input(state, &event, rng);
                    }
                }
                tick(state, rng);
                sync_surface(state, surface);
                surface.move_shape(state.ball.shape, state.ball.pos);
                pacer.pause(pause);
            }
            GamePhase::Won | GamePhase::Lost => {}
        }
    }
}

/// Mirror pending simulation events onto the surface
fn sync_surface(state: &mut GameState, surface: &mut impl Surface) {
    for event in state.drain_events() {
        match event {
            GameEvent::PaddleMoved { .. } => {
                surface.move_shape(state.paddle.shape, state.paddle.origin());
            }
            GameEvent::BrickDestroyed { shape, .. } => surface.remove_shape(shape),
            GameEvent::TurnLost {
                old_ball, new_ball, ..
            } => {
                surface.remove_shape(old_ball);
                if let Some(shape) = state.registry.get(new_ball) {
                    surface.add_shape(shape);
                }
            }
            GameEvent::Won | GameEvent::Lost => {
                if let Some(message) = state.end_message() {
                    surface.show_text(
                        message,
                        state.config.field_width / 2.0,
                        state.config.field_height / 2.0,
                    );
                }
            }
            GameEvent::Launched { .. } | GameEvent::PaddleHit | GameEvent::WallBounce(_) => {}
        }
    }
}

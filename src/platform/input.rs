//! Input seam
//!
//! Pointer events may be produced on another thread (a window's event loop);
//! they reach the tick loop through a channel and are applied there, so the
//! paddle only ever has one writer.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use crate::sim::InputEvent;

/// Source of player input
pub trait InputSource {
    /// Block until the next event. `None` once the source is closed.
    fn wait_event(&mut self) -> Option<InputEvent>;
    /// Next pending event, if any, without blocking
    fn poll_event(&mut self) -> Option<InputEvent>;
}

impl InputSource for Receiver<InputEvent> {
    fn wait_event(&mut self) -> Option<InputEvent> {
        self.recv().ok()
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.try_recv().ok()
    }
}

/// Pre-recorded input, replayed in order
impl InputSource for VecDeque<InputEvent> {
    fn wait_event(&mut self) -> Option<InputEvent> {
        self.pop_front()
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pop_front()
    }
}

//! Frame pacing

use std::time::Duration;

/// Waits between ticks
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Runs ticks back to back (headless runs, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _duration: Duration) {}
}

//! Tick source seam.
//!
//! RULE: The engine never schedules its own ticks. Whatever drives the
//! 1 Hz cadence (a UI timer, the headless runner, a test loop)
//! implements TickSource; the engine only starts it when a session
//! begins and stops it when the session leaves Playing.

use std::any::Any;

/// The contract for an external one-second cadence.
pub trait TickSource: Send {
    /// Unique stable name, used in logs.
    fn name(&self) -> &'static str;

    fn start(&mut self);

    /// Stop the cadence. Stopping a stopped source is a no-op.
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// For downcasting in tests and tooling only.
    fn as_any(&self) -> &dyn Any;
}

/// A tick source driven by hand: whoever owns the engine calls
/// `tick()` themselves. Counts start/stop transitions so tests can
/// check the cadence is stopped exactly once.
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    running: bool,
    pub starts: u32,
    pub stops:  u32,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickSource for ManualTicker {
    fn name(&self) -> &'static str { "manual" }

    fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.starts += 1;
        }
    }

    fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.stops += 1;
        }
    }

    fn is_running(&self) -> bool { self.running }

    fn as_any(&self) -> &dyn Any { self }
}

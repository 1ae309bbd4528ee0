//! Kitchen clock — owns the real-time countdown and the compressed
//! simulated cooking clock.
//!
//! One call to tick() = one real second = `compression_factor`
//! simulated seconds. The clock never schedules itself; the
//! presentation layer's cadence calls tick() at 1 Hz.

use crate::{
    config::KitchenConfig,
    types::{RealSeconds, SimSeconds},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KitchenClock {
    pub real_seconds_remaining: RealSeconds,
    pub sim_seconds_elapsed:    SimSeconds,
    real_duration:              RealSeconds,
    compression_factor:         SimSeconds,
    total_simulated:            SimSeconds,
}

/// What a single tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    Running,
    /// The real-time budget is spent; the session must end unserved.
    Expired,
}

impl KitchenClock {
    pub fn new(config: &KitchenConfig) -> Self {
        Self {
            real_seconds_remaining: config.real_duration_seconds,
            sim_seconds_elapsed:    0.0,
            real_duration:          config.real_duration_seconds,
            compression_factor:     config.compression_factor(),
            total_simulated:        config.total_simulated_seconds(),
        }
    }

    /// Advance one real second.
    pub fn tick(&mut self) -> ClockStatus {
        self.real_seconds_remaining = self.real_seconds_remaining.saturating_sub(1);
        self.sim_seconds_elapsed += self.compression_factor;
        if self.real_seconds_remaining == 0 {
            ClockStatus::Expired
        } else {
            ClockStatus::Running
        }
    }

    /// Rewind to the start of a session.
    pub fn reset(&mut self) {
        self.real_seconds_remaining = self.real_duration;
        self.sim_seconds_elapsed = 0.0;
    }

    pub fn compression_factor(&self) -> SimSeconds {
        self.compression_factor
    }

    pub fn total_simulated_seconds(&self) -> SimSeconds {
        self.total_simulated
    }

    pub fn real_duration(&self) -> RealSeconds {
        self.real_duration
    }
}

/// Render whole seconds as zero-padded `MM:SS`. Fractions are floored.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clock_compresses_one_hour_into_three_minutes() {
        let clock = KitchenClock::new(&KitchenConfig::default());
        assert_eq!(clock.compression_factor(), 20.0);
        assert_eq!(clock.real_seconds_remaining, 180);
        assert_eq!(clock.total_simulated_seconds(), 3600.0);
    }

    #[test]
    fn tick_moves_both_clocks_and_expires_at_zero() {
        let config = KitchenConfig {
            real_duration_seconds: 3,
            ..KitchenConfig::default()
        };
        let mut clock = KitchenClock::new(&config);
        assert_eq!(clock.tick(), ClockStatus::Running);
        assert_eq!(clock.tick(), ClockStatus::Running);
        assert_eq!(clock.tick(), ClockStatus::Expired);
        assert_eq!(clock.real_seconds_remaining, 0);
        assert_eq!(clock.sim_seconds_elapsed, 3600.0);

        clock.reset();
        assert_eq!(clock.real_seconds_remaining, 3);
        assert_eq!(clock.sim_seconds_elapsed, 0.0);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(59.9), "00:59");
        assert_eq!(format_clock(180.0), "03:00");
        assert_eq!(format_clock(3600.0), "60:00");
        assert_eq!(format_clock(-4.0), "00:00");
    }
}

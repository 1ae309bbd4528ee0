//! Kitchen configuration — session durations and starting heat.
//!
//! The ingredient table is fixed (see catalog.rs); only the session
//! timing is tunable. In tests, use KitchenConfig::default().

use crate::{
    error::{KitchenError, KitchenResult},
    types::{FireLevel, RealSeconds, SimSeconds, FIRE_LEVEL_MAX},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REAL_DURATION_SECONDS: RealSeconds = 180; // 3 minutes
pub const DEFAULT_SIMULATED_DURATION_MINUTES: u32 = 60; // 1 hour
pub const DEFAULT_FIRE_LEVEL: FireLevel = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KitchenConfig {
    pub real_duration_seconds:      RealSeconds,
    pub simulated_duration_minutes: u32,
    pub initial_fire_level:         FireLevel,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            real_duration_seconds:      DEFAULT_REAL_DURATION_SECONDS,
            simulated_duration_minutes: DEFAULT_SIMULATED_DURATION_MINUTES,
            initial_fire_level:         DEFAULT_FIRE_LEVEL,
        }
    }
}

impl KitchenConfig {
    /// Load from a JSON file. Missing fields fall back to the defaults.
    pub fn load(path: &str) -> KitchenResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: KitchenConfig = serde_json::from_str(&content)?;
        if let Err(e) = config.validate() {
            log::warn!("rejected config {path}: {e}");
            return Err(e);
        }
        Ok(config)
    }

    pub fn validate(&self) -> KitchenResult<()> {
        if self.real_duration_seconds == 0 {
            return Err(KitchenError::InvalidConfig {
                reason: "real_duration_seconds must be > 0".into(),
            });
        }
        if self.simulated_duration_minutes == 0 {
            return Err(KitchenError::InvalidConfig {
                reason: "simulated_duration_minutes must be > 0".into(),
            });
        }
        if self.initial_fire_level > FIRE_LEVEL_MAX {
            return Err(KitchenError::InvalidConfig {
                reason: format!(
                    "initial_fire_level {} exceeds {FIRE_LEVEL_MAX}",
                    self.initial_fire_level
                ),
            });
        }
        Ok(())
    }

    /// Simulated seconds covered by one full session.
    pub fn total_simulated_seconds(&self) -> SimSeconds {
        f64::from(self.simulated_duration_minutes) * 60.0
    }

    /// Simulated seconds that pass per real second.
    pub fn compression_factor(&self) -> SimSeconds {
        self.total_simulated_seconds() / f64::from(self.real_duration_seconds)
    }
}

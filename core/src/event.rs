//! Kitchen events — everything the presentation layer may react to.
//!
//! Engine methods return the events they produced; nothing is queued
//! or persisted. Variants are only ever appended.

use crate::{
    cook::CookState,
    types::{FireLevel, RealSeconds, SimSeconds},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KitchenEvent {
    // ── Session lifecycle ──────────────────────────
    SessionStarted {
        real_seconds:       RealSeconds,
        compression_factor: SimSeconds,
    },
    SessionReset,
    TimeExpired {
        sim_time: SimSeconds,
    },
    SessionFinished {
        served_by_user: bool,
        score:          u8,
    },

    // ── Clock ──────────────────────────────────────
    ClockAdvanced {
        real_seconds_remaining: RealSeconds,
        sim_seconds_elapsed:    SimSeconds,
    },

    // ── Pan ────────────────────────────────────────
    IngredientAdded {
        id:       String,
        sim_time: SimSeconds,
    },
    CookStateChanged {
        id:       String,
        from:     CookState,
        to:       CookState,
        sim_time: SimSeconds,
    },

    // ── Controls ───────────────────────────────────
    FireLevelChanged {
        level: FireLevel,
    },
    Stirred {
        /// False when the stir happened before the rice was in.
        counted:               bool,
        stir_count_after_rice: u32,
    },
    CoverToggled {
        covered: bool,
    },
}

impl KitchenEvent {
    /// Stable string name, handy for logs and IPC consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SessionStarted { .. }   => "session_started",
            Self::SessionReset            => "session_reset",
            Self::TimeExpired { .. }      => "time_expired",
            Self::SessionFinished { .. }  => "session_finished",
            Self::ClockAdvanced { .. }    => "clock_advanced",
            Self::IngredientAdded { .. }  => "ingredient_added",
            Self::CookStateChanged { .. } => "cook_state_changed",
            Self::FireLevelChanged { .. } => "fire_level_changed",
            Self::Stirred { .. }          => "stirred",
            Self::CoverToggled { .. }     => "cover_toggled",
        }
    }
}

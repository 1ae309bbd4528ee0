//! Render projections — what the presentation layer draws.
//!
//! A snapshot is a read-only copy taken after every tick or action.
//! It is never fed back into the engine.

use crate::{
    catalog::IngredientCatalog,
    clock::format_clock,
    cook::CookState,
    narrator::Verdict,
    session::{GamePhase, SessionState},
    types::{FireLevel, RealSeconds, SimSeconds},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub phase:                  GamePhase,
    pub real_seconds_remaining: RealSeconds,
    pub sim_seconds_elapsed:    SimSeconds,
    /// e.g. "02:41"
    pub real_clock:             String,
    /// e.g. "06:40 / 60:00"
    pub sim_clock:              String,
    pub fire_level:             FireLevel,
    pub covered:                bool,
    pub ingredients:            Vec<IngredientView>,
    pub outcome:                Option<SessionOutcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientView {
    pub id:           String,
    pub name:         String,
    pub icon:         String,
    pub added_to_pan: bool,
    pub cook_state:   CookState,
}

/// Shown once the session is Finished.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionOutcome {
    pub score:   u8,
    pub title:   String,
    pub message: String,
}

impl SessionOutcome {
    pub fn new(score: u8, verdict: Verdict) -> Self {
        Self { score, title: verdict.title, message: verdict.message }
    }
}

impl SessionSnapshot {
    pub fn capture(
        state: &SessionState,
        catalog: &IngredientCatalog,
        outcome: Option<&SessionOutcome>,
    ) -> Self {
        let ingredients = state
            .ingredients
            .iter()
            .filter_map(|inst| {
                catalog.get(inst.id).map(|def| IngredientView {
                    id:           def.id.to_string(),
                    name:         def.name.to_string(),
                    icon:         def.icon.to_string(),
                    added_to_pan: inst.added_to_pan,
                    cook_state:   inst.cook_state,
                })
            })
            .collect();

        Self {
            phase:                  state.phase,
            real_seconds_remaining: state.clock.real_seconds_remaining,
            sim_seconds_elapsed:    state.clock.sim_seconds_elapsed,
            real_clock:             format_clock(f64::from(state.clock.real_seconds_remaining)),
            sim_clock:              format!(
                "{} / {}",
                format_clock(state.clock.sim_seconds_elapsed),
                format_clock(state.clock.total_simulated_seconds())
            ),
            fire_level:             state.fire_level,
            covered:                state.covered,
            ingredients,
            outcome:                outcome.cloned(),
        }
    }
}

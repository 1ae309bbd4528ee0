//! Cook-state machine.
//!
//! Pure classification of an ingredient from its time in the pan.
//! Recomputed every tick for everything in the pan; recomputation is
//! total and idempotent, so no transition history is kept.

use crate::{
    catalog::{IngredientDefinition, IngredientRole},
    types::SimSeconds,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CookState {
    NotAdded,
    Raw,
    Cooking,
    Perfect,
    Overcooked,
    Burnt,
}

impl CookState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotAdded   => "not added",
            Self::Raw        => "raw",
            Self::Cooking    => "cooking",
            Self::Perfect    => "perfect",
            Self::Overcooked => "overcooked",
            Self::Burnt      => "burnt",
        }
    }
}

/// Classify an ingredient that is in the pan. First matching threshold
/// wins, checked from the most-cooked end down.
pub fn classify(def: &IngredientDefinition, time_in_pan: SimSeconds) -> CookState {
    if def.role == IngredientRole::LubricatingBase && time_in_pan > 0.0 {
        return CookState::Perfect;
    }

    if time_in_pan > def.overcook_end {
        CookState::Burnt
    } else if time_in_pan > def.ideal_cook_end {
        CookState::Overcooked
    } else if time_in_pan > def.min_cook_time {
        CookState::Perfect
    } else if time_in_pan > 0.0 {
        CookState::Cooking
    } else {
        CookState::Raw
    }
}

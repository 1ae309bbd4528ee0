//! Session state — the single mutable aggregate for one play-through.
//!
//! RULE: Only the engine owns a SessionState. Handlers, scoring and
//! narration receive it explicitly; nothing holds a second copy.

use crate::{
    catalog::{IngredientCatalog, IngredientDefinition},
    clock::KitchenClock,
    config::KitchenConfig,
    cook::{classify, CookState},
    types::{FireLevel, IngredientId, SimSeconds},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    PreStart,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IngredientInstance {
    pub id:             IngredientId,
    pub added_to_pan:   bool,
    pub sim_time_added: Option<SimSeconds>,
    pub cook_state:     CookState,
}

impl IngredientInstance {
    fn fresh(def: &IngredientDefinition) -> Self {
        Self {
            id:             def.id,
            added_to_pan:   false,
            sim_time_added: None,
            cook_state:     CookState::NotAdded,
        }
    }

    /// Simulated seconds in the pan at `now`, if it was ever added.
    pub fn time_in_pan(&self, now: SimSeconds) -> Option<SimSeconds> {
        self.sim_time_added.map(|added| now - added)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionState {
    pub phase:                 GamePhase,
    pub clock:                 KitchenClock,
    pub fire_level:            FireLevel,
    pub covered:               bool,
    /// One entry per catalog definition, in catalog order.
    pub ingredients:           Vec<IngredientInstance>,
    pub stir_count_after_rice: u32,
    pub rice_added_sim_time:   Option<SimSeconds>,
    pub score:                 Option<u8>,
    pub feedback:              Vec<String>,
    initial_fire_level:        FireLevel,
}

/// A cook-state change observed during recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct CookTransition {
    pub id:   IngredientId,
    pub from: CookState,
    pub to:   CookState,
}

impl SessionState {
    pub fn new(config: &KitchenConfig, catalog: &IngredientCatalog) -> Self {
        Self {
            phase:                 GamePhase::PreStart,
            clock:                 KitchenClock::new(config),
            fire_level:            config.initial_fire_level,
            covered:               false,
            ingredients:           catalog.iter().map(IngredientInstance::fresh).collect(),
            stir_count_after_rice: 0,
            rice_added_sim_time:   None,
            score:                 None,
            feedback:              Vec::new(),
            initial_fire_level:    config.initial_fire_level,
        }
    }

    /// Wipe everything back to a fresh PreStart session.
    pub fn reset(&mut self, catalog: &IngredientCatalog) {
        self.phase = GamePhase::PreStart;
        self.clock.reset();
        self.fire_level = self.initial_fire_level;
        self.covered = false;
        self.ingredients = catalog.iter().map(IngredientInstance::fresh).collect();
        self.stir_count_after_rice = 0;
        self.rice_added_sim_time = None;
        self.score = None;
        self.feedback.clear();
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn now(&self) -> SimSeconds {
        self.clock.sim_seconds_elapsed
    }

    pub fn instance(&self, id: &str) -> Option<&IngredientInstance> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn instance_mut(&mut self, id: &str) -> Option<&mut IngredientInstance> {
        self.ingredients.iter_mut().find(|i| i.id == id)
    }

    /// Re-derive the cook state of everything in the pan from the
    /// current simulated time. Returns the transitions that happened.
    pub fn recompute_cook_states(&mut self, catalog: &IngredientCatalog) -> Vec<CookTransition> {
        let now = self.now();
        let mut transitions = Vec::new();

        for instance in self.ingredients.iter_mut().filter(|i| i.added_to_pan) {
            let (Some(def), Some(time_in_pan)) = (catalog.get(instance.id), instance.time_in_pan(now))
            else {
                continue;
            };
            let next = classify(def, time_in_pan);
            if next != instance.cook_state {
                transitions.push(CookTransition {
                    id:   instance.id,
                    from: instance.cook_state,
                    to:   next,
                });
                instance.cook_state = next;
            }
        }
        transitions
    }
}

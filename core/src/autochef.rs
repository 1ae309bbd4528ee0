//! Scripted players.
//!
//! An AutoChef looks at the session before each tick and decides which
//! commands to send. Used by the headless runner and by tests that need
//! long, reproducible input streams.

use crate::{
    catalog::{IngredientCatalog, IngredientRole},
    command::PlayerCommand,
    cook::CookState,
    engine::KitchenEngine,
    event::KitchenEvent,
    rng::ChefRng,
    session::SessionState,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChefStrategy {
    /// Adds everything at the middle of its window, covers the rice
    /// once it is done and serves while it rests.
    ByTheBook,
    /// Seeded random intents, including out-of-range heat and unknown
    /// ingredients.
    Random,
}

impl std::str::FromStr for ChefStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "book" | "by_the_book" => Ok(Self::ByTheBook),
            "random"               => Ok(Self::Random),
            other => Err(format!("unknown strategy '{other}' (expected book|random)")),
        }
    }
}

pub struct AutoChef {
    strategy: ChefStrategy,
    rng:      ChefRng,
}

/// Ids the random chef may try, including one the catalog lacks.
const RANDOM_EXTRA_IDS: &[&str] = &["truffle"];

impl AutoChef {
    pub fn new(strategy: ChefStrategy, seed: u64) -> Self {
        Self { strategy, rng: ChefRng::new(seed) }
    }

    pub fn strategy(&self) -> ChefStrategy {
        self.strategy
    }

    /// Commands to send before the next tick.
    pub fn plan(&mut self, state: &SessionState, catalog: &IngredientCatalog) -> Vec<PlayerCommand> {
        match self.strategy {
            ChefStrategy::ByTheBook => plan_by_the_book(state, catalog),
            ChefStrategy::Random    => self.plan_random(state, catalog),
        }
    }

    fn plan_random(&mut self, state: &SessionState, catalog: &IngredientCatalog) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();

        if self.rng.chance(0.15) {
            let mut ids: Vec<&str> = catalog.iter().map(|d| d.id).collect();
            ids.extend_from_slice(RANDOM_EXTRA_IDS);
            if let Some(id) = self.rng.pick(&ids) {
                commands.push(PlayerCommand::AddIngredient { id: id.to_string() });
            }
        }
        if self.rng.chance(0.1) {
            commands.push(PlayerCommand::SetFireLevel { level: self.rng.range_i32(-5, 15) });
        }
        if self.rng.chance(0.1) {
            commands.push(PlayerCommand::Stir);
        }
        if self.rng.chance(0.05) {
            commands.push(PlayerCommand::ToggleCover);
        }
        if self.rng.chance(0.01) {
            commands.push(PlayerCommand::Start);
        }
        if state.clock.real_seconds_remaining < state.clock.real_duration() / 3
            && self.rng.chance(0.02)
        {
            commands.push(PlayerCommand::Serve);
        }
        commands
    }
}

fn plan_by_the_book(state: &SessionState, catalog: &IngredientCatalog) -> Vec<PlayerCommand> {
    let now = state.now();
    let mut commands: Vec<PlayerCommand> = catalog
        .iter()
        .filter(|def| now >= def.window_midpoint() && def.window_contains(now))
        .filter(|def| state.instance(def.id).is_some_and(|i| !i.added_to_pan))
        .map(|def| PlayerCommand::AddIngredient { id: def.id.to_string() })
        .collect();

    let Some(rice_def) = catalog.with_role(IngredientRole::Grain) else {
        return commands;
    };
    let Some(rice) = state.instance(rice_def.id) else {
        return commands;
    };

    if rice.cook_state == CookState::Perfect && !state.covered {
        commands.push(PlayerCommand::ToggleCover);
    }
    if rice.time_in_pan(now).is_some_and(|t| t >= rice_def.ideal_cook_end) {
        commands.push(PlayerCommand::Serve);
    }
    commands
}

/// Start a session and play it to the end. Returns every event produced.
pub fn play_session(engine: &mut KitchenEngine, chef: &mut AutoChef) -> Vec<KitchenEvent> {
    let mut events = engine.start();
    while engine.state().is_playing() {
        let commands = chef.plan(engine.state(), engine.catalog());
        for command in &commands {
            events.extend(engine.apply(command));
        }
        events.extend(engine.tick());
    }
    events
}

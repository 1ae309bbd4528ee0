//! Action handlers — validated mutators for player intents.
//!
//! RULE: Every handler is a silent no-op unless the session is Playing.
//! Stray UI events (double clicks, clicks after the end) are not errors.

use crate::{
    catalog::{IngredientCatalog, IngredientRole},
    cook::CookState,
    event::KitchenEvent,
    scoring::{score_session, Scorecard},
    session::{GamePhase, SessionState},
    types::{FIRE_LEVEL_MAX, FIRE_LEVEL_MIN},
};

/// Put an ingredient in the pan. A second add of the same id, or an id
/// the catalog does not know, changes nothing.
pub fn add_ingredient(
    state: &mut SessionState,
    catalog: &IngredientCatalog,
    id: &str,
) -> Option<KitchenEvent> {
    if !state.is_playing() {
        return None;
    }
    let Some(def) = catalog.get(id) else {
        log::warn!("add_ingredient: unknown ingredient id '{id}'");
        return None;
    };

    let now = state.now();
    let instance = state.instance_mut(id)?;
    if instance.added_to_pan {
        return None;
    }
    instance.added_to_pan = true;
    instance.sim_time_added = Some(now);
    instance.cook_state = CookState::Raw;

    if def.role == IngredientRole::Grain {
        state.rice_added_sim_time = Some(now);
    }

    log::debug!("sim={now:.0} added {} to the pan", def.id);
    Some(KitchenEvent::IngredientAdded { id: def.id.to_string(), sim_time: now })
}

/// Set the heat. Out-of-range requests are clamped to [0, 10]; a request
/// that leaves the level unchanged produces no event.
pub fn set_fire_level(state: &mut SessionState, level: i32) -> Option<KitchenEvent> {
    if !state.is_playing() {
        return None;
    }
    let clamped = level.clamp(i32::from(FIRE_LEVEL_MIN), i32::from(FIRE_LEVEL_MAX)) as u8;
    if clamped == state.fire_level {
        return None;
    }
    log::debug!("fire level {} -> {clamped}", state.fire_level);
    state.fire_level = clamped;
    Some(KitchenEvent::FireLevelChanged { level: clamped })
}

/// Stir the pan. Only counted once the rice is in and time has moved on
/// since it went in; earlier stirring is harmless.
pub fn stir(state: &mut SessionState) -> Option<KitchenEvent> {
    if !state.is_playing() {
        return None;
    }
    let counted = matches!(state.rice_added_sim_time, Some(added) if state.now() > added);
    if counted {
        state.stir_count_after_rice += 1;
    }
    Some(KitchenEvent::Stirred {
        counted,
        stir_count_after_rice: state.stir_count_after_rice,
    })
}

pub fn toggle_cover(state: &mut SessionState) -> Option<KitchenEvent> {
    if !state.is_playing() {
        return None;
    }
    state.covered = !state.covered;
    Some(KitchenEvent::CoverToggled { covered: state.covered })
}

/// End the session and score it. Runs at most once per session: any
/// call after the first transition returns None.
pub fn finish(
    state: &mut SessionState,
    catalog: &IngredientCatalog,
    served_by_user: bool,
) -> Option<Scorecard> {
    if !state.is_playing() {
        return None;
    }
    state.phase = GamePhase::Finished;

    let card = score_session(state, catalog, served_by_user);
    state.score = Some(card.score);
    state.feedback = card.feedback.clone();
    Some(card)
}

/// The player plates the dish.
pub fn serve(state: &mut SessionState, catalog: &IngredientCatalog) -> Option<Scorecard> {
    finish(state, catalog, true)
}

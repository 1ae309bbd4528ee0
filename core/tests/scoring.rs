//! Scoring engine tests.
//!
//! Most cases build a SessionState by hand and score it directly, so each
//! rule can be checked in isolation through the unclamped raw score.
//! Missing penalties for every essential total 78; without the rice, 58.

use paella_core::{
    catalog::IngredientCatalog,
    config::KitchenConfig,
    cook::CookState,
    engine::KitchenEngine,
    scoring::{score_session, Scorecard},
    session::{GamePhase, SessionState},
};

fn catalog() -> IngredientCatalog {
    IngredientCatalog::paella().expect("paella catalog")
}

fn fresh(catalog: &IngredientCatalog, now: f64) -> SessionState {
    let mut state = SessionState::new(&KitchenConfig::default(), catalog);
    state.phase = GamePhase::Playing;
    state.clock.sim_seconds_elapsed = now;
    state
}

fn place(state: &mut SessionState, id: &str, added_at: f64, cook_state: CookState) {
    let inst = state.instance_mut(id).expect("known ingredient");
    inst.added_to_pan = true;
    inst.sim_time_added = Some(added_at);
    inst.cook_state = cook_state;
    if id == "rice" {
        state.rice_added_sim_time = Some(added_at);
    }
}

fn lines_containing(card: &Scorecard, needle: &str) -> usize {
    card.feedback.iter().filter(|l| l.contains(needle)).count()
}

const RICE_AT: f64 = 1650.0;

/// Rice alone, still cooking, served early: 50 + 10 − 58 − 5 (haste).
fn rice_only(catalog: &IngredientCatalog) -> SessionState {
    let mut state = fresh(catalog, 2000.0);
    place(&mut state, "rice", RICE_AT, CookState::Cooking);
    state
}

#[test]
fn oil_only_until_timeout_scores_below_fifty() {
    let mut engine = KitchenEngine::build_test().unwrap();
    engine.start();
    engine.add_ingredient("oil");
    engine.run_ticks(1000);

    let card = engine.scorecard().expect("scored");
    assert!(!card.served_by_user);
    assert!(card.score < 50);
    // 50 + 2 (on time) + 1 (perfect) − 73 (missing) − 10 (unserved)
    assert_eq!(card.raw_score, -30.0);
    assert_eq!(card.score, 0);

    assert_eq!(lines_containing(card, "ESSENTIAL"), 10);
    assert_eq!(lines_containing(card, "forgot the oil"), 0);
    assert_eq!(lines_containing(card, "broth"), 0);
    assert_eq!(lines_containing(card, "You never served"), 1);
}

#[test]
fn ideal_session_hits_the_ceiling() {
    let catalog = catalog();
    let serve_at = RICE_AT + 1200.0; // rice exactly at its ideal cook end
    let mut state = fresh(&catalog, serve_at);
    for def in catalog.iter().filter(|d| d.essential) {
        let added_at = if def.id == "rice" { RICE_AT } else { def.window_midpoint() };
        place(&mut state, def.id, added_at, CookState::Perfect);
    }
    state.covered = true;

    let card = score_session(&state, &catalog, true);
    // 50 + 43 on time + 33 perfect + 5 rested covered
    assert_eq!(card.raw_score, 131.0);
    assert_eq!(card.score, 100);
    assert!(card.feedback.is_empty(), "unexpected feedback: {:?}", card.feedback);
}

#[test]
fn four_stirs_cost_exactly_twelve() {
    let catalog = catalog();
    let calm = score_session(&rice_only(&catalog), &catalog, true);

    let mut stirred = rice_only(&catalog);
    stirred.stir_count_after_rice = 4;
    let card = score_session(&stirred, &catalog, true);

    assert_eq!(calm.raw_score, -3.0);
    assert_eq!(calm.raw_score - card.raw_score, 12.0);
    assert_eq!(lines_containing(&card, "stirred the rice 4 times"), 1);
}

#[test]
fn stirring_penalty_caps_at_fifteen() {
    let catalog = catalog();
    let calm = score_session(&rice_only(&catalog), &catalog, true);

    let mut stirred = rice_only(&catalog);
    stirred.stir_count_after_rice = 10;
    let card = score_session(&stirred, &catalog, true);
    assert_eq!(calm.raw_score - card.raw_score, 15.0);
}

#[test]
fn a_single_stir_is_free() {
    let catalog = catalog();
    let calm = score_session(&rice_only(&catalog), &catalog, true);

    let mut stirred = rice_only(&catalog);
    stirred.stir_count_after_rice = 1;
    let card = score_session(&stirred, &catalog, true);
    assert_eq!(calm.raw_score, card.raw_score);
    assert_eq!(lines_containing(&card, "stirred"), 0);
}

#[test]
fn stirring_four_times_through_the_engine() {
    let mut engine = KitchenEngine::build_test().unwrap();
    engine.start();
    while engine.state().now() < RICE_AT {
        engine.tick();
    }
    engine.add_ingredient("rice");
    engine.tick();
    for _ in 0..4 {
        engine.stir();
    }
    assert_eq!(engine.state().stir_count_after_rice, 4);

    engine.serve();
    let card = engine.scorecard().unwrap();
    assert_eq!(lines_containing(card, "stirred the rice 4 times"), 1);
}

#[test]
fn never_serving_costs_ten() {
    let mut engine = KitchenEngine::build_test().unwrap();
    engine.start();
    engine.run_ticks(180);

    assert_eq!(engine.state().phase, GamePhase::Finished);
    let card = engine.scorecard().unwrap();
    assert!(!card.served_by_user);
    // 50 − 78 missing − 10 unserved
    assert_eq!(card.raw_score, -38.0);
    assert_eq!(card.feedback.last().map(String::as_str), Some(
        "TIME! You never served. A paella that never reaches the table is a failed paella."
    ));
}

#[test]
fn wrong_timing_names_the_direction() {
    let catalog = catalog();
    let mut state = fresh(&catalog, 2000.0);
    place(&mut state, "chicken", 20.0, CookState::Burnt);
    place(&mut state, "tomato", 900.0, CookState::Burnt);

    let card = score_session(&state, &catalog, true);
    assert_eq!(lines_containing(&card, "chicken went in TOO EARLY"), 1);
    assert_eq!(lines_containing(&card, "tomato went in TOO LATE"), 1);

    // Timing line comes before the cook line for the same ingredient.
    let early = card.feedback.iter().position(|l| l.contains("chicken went in")).unwrap();
    let burnt = card.feedback.iter().position(|l| l.contains("chicken is BURNT")).unwrap();
    assert!(early < burnt);
}

#[test]
fn window_edges_count_as_on_time() {
    let catalog = catalog();
    let mut state = fresh(&catalog, 2000.0);
    place(&mut state, "chicken", 60.0, CookState::Cooking);
    place(&mut state, "rabbit", 300.0, CookState::Cooking);

    let card = score_session(&state, &catalog, true);
    assert_eq!(lines_containing(&card, "went in"), 0);
}

#[test]
fn zero_penalty_cook_states_stay_silent() {
    let catalog = catalog();
    let mut state = fresh(&catalog, 2000.0);
    // Water has no raw/burnt penalty; the oil has no raw penalty.
    place(&mut state, "water", 800.0, CookState::Burnt);
    place(&mut state, "oil", 2000.0, CookState::Raw);

    let card = score_session(&state, &catalog, true);
    assert_eq!(lines_containing(&card, "water is BURNT"), 0);
    assert_eq!(lines_containing(&card, "oil came out RAW"), 0);
}

#[test]
fn raw_rice_on_serve_is_penalised_without_a_second_line() {
    let catalog = catalog();
    let mut state = fresh(&catalog, RICE_AT);
    place(&mut state, "rice", RICE_AT, CookState::Raw);

    let card = score_session(&state, &catalog, true);
    // 50 + 10 − 15 raw − 58 missing − 15 raw on serve − 5 haste
    assert_eq!(card.raw_score, -33.0);
    assert_eq!(lines_containing(&card, "rice"), 1);
    assert_eq!(lines_containing(&card, "rice came out RAW"), 1);
}

#[test]
fn water_without_rice_makes_broth() {
    let catalog = catalog();
    let mut state = fresh(&catalog, 2000.0);
    place(&mut state, "water", 800.0, CookState::Perfect);

    let card = score_session(&state, &catalog, true);
    assert_eq!(lines_containing(&card, "broth"), 1);
    // 50 + 3 on time − 70 missing − 15 broth; no haste without rice
    assert_eq!(card.raw_score, -32.0);
}

#[test]
fn water_with_rice_is_not_broth() {
    let catalog = catalog();
    let mut state = rice_only(&catalog);
    place(&mut state, "water", 800.0, CookState::Perfect);

    let card = score_session(&state, &catalog, true);
    assert_eq!(lines_containing(&card, "broth"), 0);
}

#[test]
fn scorching_fire_near_the_end_costs_eight() {
    let catalog = catalog();
    let build = |fire: u8| {
        let mut state = fresh(&catalog, RICE_AT + 1000.0);
        place(&mut state, "rice", RICE_AT, CookState::Perfect);
        state.fire_level = fire;
        state
    };

    let calm = score_session(&build(5), &catalog, true);
    let hot = score_session(&build(8), &catalog, true);
    assert_eq!(calm.raw_score - hot.raw_score, 8.0);
    assert_eq!(lines_containing(&hot, "INCINERATING"), 1);

    // Not checked before the last ten minutes of the rice's cook.
    let mut early = build(10);
    early.clock.sim_seconds_elapsed = RICE_AT + 500.0;
    early.instance_mut("rice").unwrap().cook_state = CookState::Cooking;
    let card = score_session(&early, &catalog, true);
    assert_eq!(lines_containing(&card, "INCINERATING"), 0);
}

#[test]
fn heat_check_skips_spoiled_rice() {
    let catalog = catalog();
    let mut state = fresh(&catalog, RICE_AT + 1300.0);
    place(&mut state, "rice", RICE_AT, CookState::Overcooked);
    state.fire_level = 10;

    let card = score_session(&state, &catalog, true);
    assert_eq!(lines_containing(&card, "INCINERATING"), 0);
}

#[test]
fn weak_fire_needs_rice_well_past_minimum() {
    let catalog = catalog();
    let build = |time_in_pan: f64| {
        let mut state = fresh(&catalog, RICE_AT + time_in_pan);
        place(&mut state, "rice", RICE_AT, CookState::Perfect);
        state.fire_level = 1;
        state
    };

    let card = score_session(&build(1100.0), &catalog, true);
    assert_eq!(lines_containing(&card, "too LOW"), 0);

    let card = score_session(&build(1210.0), &catalog, true);
    assert_eq!(lines_containing(&card, "too LOW"), 1);
}

#[test]
fn resting_uncovered_in_the_window_costs_five() {
    let catalog = catalog();
    let build = |covered: bool| {
        let mut state = fresh(&catalog, RICE_AT + 1300.0);
        place(&mut state, "rice", RICE_AT, CookState::Overcooked);
        state.covered = covered;
        state
    };

    let covered = score_session(&build(true), &catalog, true);
    let open = score_session(&build(false), &catalog, true);
    assert_eq!(covered.raw_score - open.raw_score, 10.0);
    assert_eq!(lines_containing(&open, "REST COVERED"), 1);
    assert_eq!(lines_containing(&covered, "REST COVERED"), 0);
}

#[test]
fn cover_outside_the_rest_window_changes_nothing() {
    let catalog = catalog();
    let build = |covered: bool| {
        let mut state = fresh(&catalog, RICE_AT + 1000.0);
        place(&mut state, "rice", RICE_AT, CookState::Perfect);
        state.covered = covered;
        state
    };

    let covered = score_session(&build(true), &catalog, true);
    let open = score_session(&build(false), &catalog, true);
    assert_eq!(covered.raw_score, open.raw_score);
}

#[test]
fn resting_only_counts_when_served() {
    let catalog = catalog();
    let mut state = fresh(&catalog, RICE_AT + 1300.0);
    place(&mut state, "rice", RICE_AT, CookState::Overcooked);

    let card = score_session(&state, &catalog, false);
    assert_eq!(lines_containing(&card, "REST COVERED"), 0);
}

#[test]
fn hasty_serve_needs_rice_in_the_pan() {
    let catalog = catalog();
    let card = score_session(&rice_only(&catalog), &catalog, true);
    assert_eq!(lines_containing(&card, "in a hurry"), 1);

    let empty = fresh(&catalog, 100.0);
    let card = score_session(&empty, &catalog, true);
    assert_eq!(lines_containing(&card, "in a hurry"), 0);

    let mut patient = rice_only(&catalog);
    patient.clock.sim_seconds_elapsed = 2520.0;
    let card = score_session(&patient, &catalog, true);
    assert_eq!(lines_containing(&card, "in a hurry"), 0);
}

#[test]
fn feedback_follows_the_fixed_evaluation_order() {
    let catalog = catalog();
    let mut state = fresh(&catalog, 1900.0);
    place(&mut state, "water", 800.0, CookState::Perfect);
    state.stir_count_after_rice = 3;

    let card = score_session(&state, &catalog, false);
    let pos = |needle: &str| card.feedback.iter().position(|l| l.contains(needle)).unwrap();

    // Missing lines in catalog order, then broth, stirring, time.
    assert!(pos("forgot the oil") < pos("forgot the chicken"));
    assert!(pos("forgot the chicken") < pos("forgot the rice"));
    assert!(pos("forgot the rice") < pos("broth"));
    assert!(pos("broth") < pos("stirred"));
    assert!(pos("stirred") < pos("You never served"));
}

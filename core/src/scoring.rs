//! Scoring engine — turns a finished session into a 0–100 score and an
//! ordered list of feedback lines.
//!
//! EVALUATION ORDER (fixed; feedback order depends on it):
//!   1. Per-ingredient pass, in catalog order (timing, then cook state,
//!      or the missing-essential penalty).
//!   2. Rice heat control, or the water-without-rice penalty.
//!   3. Stirring after the rice went in.
//!   4. Resting covered.
//!   5. Serve outcome (raw rice, haste) or the ran-out-of-time penalty.
//!
//! Scoring is pure: same state in, same card out.

use crate::{
    catalog::{IngredientCatalog, IngredientDefinition, IngredientRole},
    cook::CookState,
    session::{IngredientInstance, SessionState},
    types::{FireLevel, SimSeconds},
};
use serde::{Deserialize, Serialize};

pub const BASE_SCORE: f64 = 50.0;
pub const MAX_SCORE: f64 = 100.0;

/// The heat check starts this long before the rice's ideal cook end.
const HEAT_CHECK_LEAD: SimSeconds = 600.0;
/// Low heat only hurts once the rice is this far past its minimum cook.
const LOW_HEAT_GRACE: SimSeconds = 300.0;
const SCORCHING_FIRE_ABOVE: FireLevel = 7;
const WEAK_FIRE_BELOW: FireLevel = 3;
const HEAT_PENALTY: f64 = 8.0;

const BROTH_PENALTY: f64 = 15.0;

const STIR_PENALTY_EACH: f64 = 3.0;
const STIR_PENALTY_CAP: f64 = 15.0;

const REST_WINDOW: SimSeconds = 600.0;
const REST_ADJUSTMENT: f64 = 5.0;

const RAW_RICE_SERVED_PENALTY: f64 = 15.0;
const HASTE_FRACTION: f64 = 0.7;
const HASTE_PENALTY: f64 = 5.0;
const UNSERVED_PENALTY: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scorecard {
    pub score:          u8,
    /// Score before rounding and clamping. Useful for tuning.
    pub raw_score:      f64,
    pub feedback:       Vec<String>,
    pub served_by_user: bool,
}

/// Running score plus the feedback lines emitted so far.
struct Tally {
    score:    f64,
    feedback: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self { score: BASE_SCORE, feedback: Vec::new() }
    }

    fn bonus(&mut self, points: f64) {
        self.score += points;
    }

    fn penalty(&mut self, points: f64) {
        self.score -= points;
    }

    fn note(&mut self, line: String) {
        self.feedback.push(line);
    }

    fn finish(self, served_by_user: bool) -> Scorecard {
        let score = self.score.round().clamp(0.0, MAX_SCORE) as u8;
        Scorecard {
            score,
            raw_score: self.score,
            feedback: self.feedback,
            served_by_user,
        }
    }
}

/// Score a session at the moment it leaves Playing.
pub fn score_session(
    state: &SessionState,
    catalog: &IngredientCatalog,
    served_by_user: bool,
) -> Scorecard {
    let mut tally = Tally::new();
    let now = state.now();

    for def in catalog.iter() {
        match state.instance(def.id) {
            Some(instance) if instance.added_to_pan => {
                score_added(&mut tally, def, instance);
            }
            _ if def.essential => {
                tally.penalty(def.penalty_for_missing);
                tally.note(format!(
                    "You forgot the {}, an ESSENTIAL ingredient. Unforgivable!",
                    lower(def)
                ));
            }
            _ => {}
        }
    }

    let grain = catalog
        .grain()
        .and_then(|def| state.instance(def.id).map(|inst| (def, inst)))
        .filter(|(_, inst)| inst.added_to_pan);

    match grain {
        Some((def, rice)) => score_heat_control(&mut tally, state, def, rice),
        None => {
            let liquid_added = catalog
                .with_role(IngredientRole::Liquid)
                .and_then(|def| state.instance(def.id))
                .is_some_and(|inst| inst.added_to_pan);
            if liquid_added {
                tally.penalty(BROTH_PENALTY);
                tally.note(
                    "Water without rice... You made an expensive broth, not a paella. What a waste!"
                        .into(),
                );
            }
        }
    }

    if state.stir_count_after_rice > 1 {
        let stirs = state.stir_count_after_rice;
        tally.penalty(STIR_PENALTY_CAP.min(f64::from(stirs) * STIR_PENALTY_EACH));
        tally.note(format!(
            "You stirred the rice {stirs} times. Once it is spread out, the rice is NOT TOUCHED!"
        ));
    }

    if let Some((def, rice)) = grain {
        score_resting(&mut tally, state, def, rice, served_by_user);
    }

    if served_by_user {
        if let Some((_, rice)) = grain {
            // The raw-ingredient line from the first pass already says it.
            if rice.cook_state == CookState::Raw {
                tally.penalty(RAW_RICE_SERVED_PENALTY);
            }
            if now < state.clock.total_simulated_seconds() * HASTE_FRACTION {
                tally.penalty(HASTE_PENALTY);
                tally.note("You served in a hurry. Patience is a paella cook's virtue.".into());
            }
        }
    } else {
        tally.penalty(UNSERVED_PENALTY);
        tally.note("TIME! You never served. A paella that never reaches the table is a failed paella.".into());
    }

    let card = tally.finish(served_by_user);
    log::debug!(
        "scored session: raw={:.1} final={} lines={}",
        card.raw_score,
        card.score,
        card.feedback.len()
    );
    card
}

fn score_added(tally: &mut Tally, def: &IngredientDefinition, instance: &IngredientInstance) {
    let Some(added_at) = instance.sim_time_added else {
        return;
    };

    if def.window_contains(added_at) {
        tally.bonus(def.points_for_adding_on_time);
    } else {
        tally.penalty(def.penalty_for_adding_wrong_time);
        let when = if added_at < def.correct_window_start { "TOO EARLY" } else { "TOO LATE" };
        tally.note(format!("The {} went in {when}. Timing is everything!", lower(def)));
    }

    match instance.cook_state {
        CookState::Perfect => tally.bonus(def.points_for_perfect_cook),
        CookState::Raw => {
            tally.penalty(def.penalty_for_raw);
            if def.penalty_for_raw > 0.0 {
                tally.note(format!(
                    "The {} came out RAW. Were you going for tartare?",
                    lower(def)
                ));
            }
        }
        CookState::Overcooked => {
            tally.penalty(def.penalty_for_overcooked);
            if def.penalty_for_overcooked > 0.0 {
                tally.note(format!(
                    "The {} was overcooked. A shame, you almost had it.",
                    lower(def)
                ));
            }
        }
        CookState::Burnt => {
            tally.penalty(def.penalty_for_burnt);
            if def.penalty_for_burnt > 0.0 {
                tally.note(format!(
                    "SACRILEGE! The {} is BURNT. This is unacceptable.",
                    lower(def)
                ));
            }
        }
        CookState::Cooking | CookState::NotAdded => {}
    }
}

fn score_heat_control(
    tally: &mut Tally,
    state: &SessionState,
    def: &IngredientDefinition,
    rice: &IngredientInstance,
) {
    let Some(time_in_pan) = rice.time_in_pan(state.now()) else {
        return;
    };
    let spoiled = matches!(rice.cook_state, CookState::Burnt | CookState::Overcooked);
    if spoiled || time_in_pan <= def.ideal_cook_end - HEAT_CHECK_LEAD {
        return;
    }

    if state.fire_level > SCORCHING_FIRE_ABOVE {
        tally.penalty(HEAT_PENALTY);
        tally.note("The fire was INCINERATING the rice at the end... Control, please!".into());
    }
    if state.fire_level < WEAK_FIRE_BELOW && time_in_pan > def.min_cook_time + LOW_HEAT_GRACE {
        tally.penalty(HEAT_PENALTY);
        tally.note("The fire was far too LOW for the rice. Were you hoping for a miracle?".into());
    }
}

fn score_resting(
    tally: &mut Tally,
    state: &SessionState,
    def: &IngredientDefinition,
    rice: &IngredientInstance,
    served_by_user: bool,
) {
    if !matches!(rice.cook_state, CookState::Perfect | CookState::Overcooked) {
        return;
    }
    let Some(added_at) = rice.sim_time_added else {
        return;
    };

    let rest_start = added_at + def.ideal_cook_end;
    let rest_end = rest_start + REST_WINDOW;
    let now = state.now();
    if !served_by_user || now < rest_start || now > rest_end {
        return;
    }

    if state.covered {
        tally.bonus(REST_ADJUSTMENT);
    } else {
        tally.penalty(REST_ADJUSTMENT);
        tally.note("A paella needs to REST COVERED. A crucial detail you ignored.".into());
    }
}

fn lower(def: &IngredientDefinition) -> String {
    def.name.to_lowercase()
}

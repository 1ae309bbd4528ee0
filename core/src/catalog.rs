//! Ingredient catalog — the fixed recipe table.
//!
//! Times are in simulated seconds. The add window is measured on the
//! session clock; the three cook thresholds are measured as time IN PAN.
//!
//! Catalog order is significant: scoring walks it in order, so feedback
//! lines come out in catalog order.

use crate::{
    error::{KitchenError, KitchenResult},
    types::{IngredientId, SimSeconds},
};
use serde::Serialize;
use std::collections::HashSet;

/// Ingredients that scoring and cook classification treat specially.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IngredientRole {
    Plain,
    /// Coats the pan; counts as perfect as soon as it is in. (oil)
    LubricatingBase,
    /// The staple the dish is judged on. (rice)
    Grain,
    /// Cooking liquid; pointless without the grain. (water)
    Liquid,
}

impl IngredientRole {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain           => "plain",
            Self::LubricatingBase => "lubricating base",
            Self::Grain           => "grain",
            Self::Liquid          => "liquid",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IngredientDefinition {
    pub id:   IngredientId,
    pub name: &'static str,
    pub icon: &'static str,
    pub role: IngredientRole,

    // When to add it (session clock).
    pub correct_window_start: SimSeconds,
    pub correct_window_end:   SimSeconds,

    // How long it should stay in the pan.
    pub min_cook_time:  SimSeconds,
    pub ideal_cook_end: SimSeconds,
    pub overcook_end:   SimSeconds,

    pub points_for_adding_on_time:   f64,
    pub penalty_for_adding_wrong_time: f64,
    pub penalty_for_missing:         f64,
    pub points_for_perfect_cook:     f64,
    pub penalty_for_raw:             f64,
    pub penalty_for_overcooked:      f64,
    pub penalty_for_burnt:           f64,

    pub essential: bool,
}

impl IngredientDefinition {
    pub fn window_contains(&self, sim_time: SimSeconds) -> bool {
        sim_time >= self.correct_window_start && sim_time <= self.correct_window_end
    }

    pub fn window_midpoint(&self) -> SimSeconds {
        (self.correct_window_start + self.correct_window_end) / 2.0
    }

    fn check(&self) -> KitchenResult<()> {
        let fail = |reason: String| {
            Err(KitchenError::CatalogInvariant { id: self.id.to_string(), reason })
        };

        let times = [
            self.correct_window_start,
            self.correct_window_end,
            self.min_cook_time,
            self.ideal_cook_end,
            self.overcook_end,
        ];
        if times.iter().any(|t| !t.is_finite()) {
            return fail("timing values must be finite".into());
        }
        if self.correct_window_start > self.correct_window_end {
            return fail(format!(
                "add window start {} is after end {}",
                self.correct_window_start, self.correct_window_end
            ));
        }
        if self.min_cook_time < 0.0 {
            return fail(format!("min cook time {} is negative", self.min_cook_time));
        }
        if self.min_cook_time > self.ideal_cook_end || self.ideal_cook_end > self.overcook_end {
            return fail(format!(
                "cook thresholds out of order: min={} ideal={} overcook={}",
                self.min_cook_time, self.ideal_cook_end, self.overcook_end
            ));
        }

        let coefficients = [
            self.points_for_adding_on_time,
            self.penalty_for_adding_wrong_time,
            self.penalty_for_missing,
            self.points_for_perfect_cook,
            self.penalty_for_raw,
            self.penalty_for_overcooked,
            self.penalty_for_burnt,
        ];
        if coefficients.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return fail("scoring coefficients must be finite and non-negative".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    definitions: Vec<IngredientDefinition>,
}

impl IngredientCatalog {
    /// Build and validate a catalog. Violations are programmer errors in
    /// the table, so callers are expected to fail fast on Err.
    pub fn new(definitions: Vec<IngredientDefinition>) -> KitchenResult<Self> {
        let catalog = Self { definitions };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The paella table everything else is tuned against.
    pub fn paella() -> KitchenResult<Self> {
        Self::new(paella_definitions())
    }

    pub fn validate(&self) -> KitchenResult<()> {
        let mut seen = HashSet::new();
        for def in &self.definitions {
            if !seen.insert(def.id) {
                return Err(KitchenError::DuplicateIngredient { id: def.id.to_string() });
            }
            def.check()?;
        }

        for role in [
            IngredientRole::LubricatingBase,
            IngredientRole::Grain,
            IngredientRole::Liquid,
        ] {
            let count = self.definitions.iter().filter(|d| d.role == role).count();
            if count != 1 {
                return Err(KitchenError::MissingRole { role: role.name().to_string() });
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&IngredientDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IngredientDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The single ingredient holding `role`. Validation guarantees one
    /// exists for every non-plain role.
    pub fn with_role(&self, role: IngredientRole) -> Option<&IngredientDefinition> {
        self.definitions.iter().find(|d| d.role == role)
    }

    pub fn grain(&self) -> Option<&IngredientDefinition> {
        self.with_role(IngredientRole::Grain)
    }
}

#[allow(clippy::too_many_arguments)]
fn def(
    id: IngredientId,
    name: &'static str,
    icon: &'static str,
    role: IngredientRole,
    window: (SimSeconds, SimSeconds),
    cook: (SimSeconds, SimSeconds, SimSeconds),
    // (on time, wrong time, missing, perfect, raw, overcooked, burnt)
    points: (f64, f64, f64, f64, f64, f64, f64),
    essential: bool,
) -> IngredientDefinition {
    IngredientDefinition {
        id,
        name,
        icon,
        role,
        correct_window_start: window.0,
        correct_window_end: window.1,
        min_cook_time: cook.0,
        ideal_cook_end: cook.1,
        overcook_end: cook.2,
        points_for_adding_on_time: points.0,
        penalty_for_adding_wrong_time: points.1,
        penalty_for_missing: points.2,
        points_for_perfect_cook: points.3,
        penalty_for_raw: points.4,
        penalty_for_overcooked: points.5,
        penalty_for_burnt: points.6,
        essential,
    }
}

fn paella_definitions() -> Vec<IngredientDefinition> {
    use IngredientRole::*;
    vec![
        def("oil", "Oil", "💧", LubricatingBase,
            (0.0, 120.0), (1.0, 3600.0, 3600.0),
            (2.0, 1.0, 5.0, 1.0, 0.0, 0.0, 1.0), true),
        // Sofrito meats: 10–20 min, overcooked past 25.
        def("chicken", "Chicken", "🍗", Plain,
            (60.0, 300.0), (600.0, 1200.0, 1500.0),
            (5.0, 3.0, 10.0, 5.0, 8.0, 4.0, 10.0), true),
        def("rabbit", "Rabbit", "🐇", Plain,
            (60.0, 300.0), (600.0, 1200.0, 1500.0),
            (5.0, 3.0, 10.0, 5.0, 8.0, 4.0, 10.0), true),
        def("greenBeans", "Green beans", "🌿", Plain,
            (300.0, 600.0), (300.0, 720.0, 900.0),
            (3.0, 2.0, 5.0, 3.0, 4.0, 2.0, 5.0), true),
        def("garrofo", "Garrofó", "🫘", Plain,
            (300.0, 600.0), (300.0, 720.0, 900.0),
            (3.0, 2.0, 5.0, 3.0, 4.0, 2.0, 5.0), true),
        def("tomato", "Tomato", "🍅", Plain,
            (480.0, 720.0), (180.0, 480.0, 600.0),
            (4.0, 2.0, 5.0, 3.0, 3.0, 2.0, 5.0), true),
        // Burns within seconds.
        def("paprika", "Paprika", "🌶️", Plain,
            (600.0, 780.0), (10.0, 30.0, 45.0),
            (3.0, 2.0, 4.0, 2.0, 1.0, 4.0, 8.0), true),
        def("water", "Water", "🚰", Liquid,
            (720.0, 1020.0), (1.0, 3600.0, 3600.0),
            (3.0, 2.0, 8.0, 0.0, 0.0, 0.0, 0.0), true),
        def("saffron", "Saffron", "✨", Plain,
            (720.0, 1020.0), (1.0, 3600.0, 3600.0),
            (4.0, 2.0, 4.0, 1.0, 0.0, 0.0, 0.0), true),
        def("salt", "Salt", "🧂", Plain,
            (0.0, 1500.0), (1.0, 3600.0, 3600.0),
            (1.0, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0), true),
        // 15–20 min, overcooked at 23, burnt after.
        def("rice", "Rice", "🍚", Grain,
            (1500.0, 1800.0), (900.0, 1200.0, 1380.0),
            (10.0, 8.0, 20.0, 10.0, 15.0, 8.0, 20.0), true),
        def("rosemary", "Rosemary", "🌱", Plain,
            (2700.0, 3300.0), (60.0, 300.0, 480.0),
            (1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 2.0), false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paella_table_is_valid() {
        let catalog = IngredientCatalog::paella().expect("paella catalog");
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.grain().map(|d| d.id), Some("rice"));
        assert_eq!(
            catalog.with_role(IngredientRole::LubricatingBase).map(|d| d.id),
            Some("oil")
        );
        assert_eq!(catalog.with_role(IngredientRole::Liquid).map(|d| d.id), Some("water"));
    }

    #[test]
    fn rejects_inverted_cook_thresholds() {
        let mut defs = paella_definitions();
        defs[1].ideal_cook_end = 2000.0; // past overcook_end
        let err = IngredientCatalog::new(defs).unwrap_err();
        assert!(matches!(err, KitchenError::CatalogInvariant { ref id, .. } if id == "chicken"));
    }

    #[test]
    fn rejects_inverted_add_window() {
        let mut defs = paella_definitions();
        defs[0].correct_window_start = 500.0;
        assert!(IngredientCatalog::new(defs).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut defs = paella_definitions();
        let copy = defs[2].clone();
        defs.push(copy);
        let err = IngredientCatalog::new(defs).unwrap_err();
        assert!(matches!(err, KitchenError::DuplicateIngredient { .. }));
    }

    #[test]
    fn rejects_catalog_without_grain() {
        let defs: Vec<_> = paella_definitions()
            .into_iter()
            .filter(|d| d.role != IngredientRole::Grain)
            .collect();
        let err = IngredientCatalog::new(defs).unwrap_err();
        assert!(matches!(err, KitchenError::MissingRole { ref role } if role == "grain"));
    }
}

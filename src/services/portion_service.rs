use std::sync::Arc;

use crate::models::{Goal, MacroSplit, Portion};
use crate::services::catalog::{canonical_ingredient, Catalog};

/// Seasonings kept at their base amount regardless of goal scaling.
const UNSCALED: &[&str] = &["salt", "pepper", "sugar", "cooking_oil", "olive_oil"];

/// Turns a meal's ingredient list into gram portions, scaled by goal.
///
/// Never fails: malformed tokens are dropped and an empty or fully-invalid
/// input yields an empty portion list.
#[derive(Debug, Clone)]
pub struct PortionEstimator {
    catalog: Arc<Catalog>,
}

impl PortionEstimator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The macro target is part of the estimation contract; sizing currently
    /// keys off per-ingredient base amounts and the goal multiplier only.
    pub fn estimate(&self, ingredients: &[String], _macros: &MacroSplit, goal: Goal) -> Vec<Portion> {
        let goal_multiplier = match goal {
            Goal::MuscleGain => 1.2,
            Goal::FatLoss => 0.8,
            Goal::Maintain => 1.0,
        };

        ingredients
            .iter()
            // Single-character tokens are upstream data corruption (a string
            // iterated as characters), not real ingredients.
            .filter(|ing| ing.trim().chars().count() > 1)
            .map(|ingredient| {
                let base = self.catalog.base_grams(ingredient);
                let key = canonical_ingredient(ingredient);
                let grams = if UNSCALED.contains(&key.as_str()) {
                    base
                } else {
                    base * goal_multiplier
                };

                Portion {
                    food: ingredient.trim().to_string(),
                    grams: grams.round(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn estimator() -> PortionEstimator {
        PortionEstimator::new(Arc::new(Catalog::new()))
    }

    fn macros() -> MacroSplit {
        MacroSplit { protein_g: 120, carbs_g: 250, fat_g: 60 }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_character_tokens_are_dropped() {
        let portions = estimator().estimate(&strings(&["a", "rice"]), &macros(), Goal::Maintain);
        assert_eq!(portions.len(), 1);
        assert_eq!(portions[0].food, "rice");
        assert_eq!(portions[0].grams, 150.0);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let portions = estimator().estimate(&[], &macros(), Goal::Maintain);
        assert!(portions.is_empty());

        let portions = estimator().estimate(&strings(&["x", "y"]), &macros(), Goal::Maintain);
        assert!(portions.is_empty());
    }

    #[test]
    fn goal_multiplier_scales_foods_but_not_seasonings() {
        let gain = estimator().estimate(&strings(&["rice", "salt"]), &macros(), Goal::MuscleGain);
        assert_eq!(gain[0].grams, 180.0); // 150 * 1.2
        assert_eq!(gain[1].grams, 2.0); // seasoning stays at base

        let loss = estimator().estimate(&strings(&["rice", "olive_oil"]), &macros(), Goal::FatLoss);
        assert_eq!(loss[0].grams, 120.0); // 150 * 0.8
        assert_eq!(loss[1].grams, 10.0);
    }

    #[test]
    fn unknown_ingredient_gets_default_base() {
        let portions = estimator().estimate(&strings(&["quinoa"]), &macros(), Goal::Maintain);
        assert_eq!(portions[0].grams, 100.0);
    }

    #[test]
    fn aliases_resolve_to_the_same_base_amount() {
        let a = estimator().estimate(&strings(&["vegetables"]), &macros(), Goal::Maintain);
        let b = estimator().estimate(&strings(&["vegetable_mix"]), &macros(), Goal::Maintain);
        assert_eq!(a[0].grams, b[0].grams);
    }
}

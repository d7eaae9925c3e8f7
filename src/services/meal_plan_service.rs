use std::collections::VecDeque;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{DayPart, DietDay, MealSlots, NutritionTarget, UserProfile};
use crate::services::catalog::Catalog;

/// How many previous days a day-part's meal pick is excluded for.
const LOOKBACK_DAYS: usize = 2;

/// Picks the week's meal names per day-part and attaches their ingredient
/// lists. Portions, recipes and meal details are filled in downstream by the
/// orchestrator.
#[derive(Debug, Clone)]
pub struct MealPlanner {
    catalog: Arc<Catalog>,
}

impl MealPlanner {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The calorie/macro targets are part of the planning contract but meal
    /// *selection* is independent of them; portion sizing downstream is what
    /// reacts to the targets.
    pub fn generate<R: Rng>(
        &self,
        profile: &UserProfile,
        _targets: &NutritionTarget,
        rng: &mut R,
    ) -> Vec<DietDay> {
        let mut recent: MealSlots<VecDeque<String>> = MealSlots::default();
        let mut plan = Vec::with_capacity(7);

        for day in 1..=7 {
            let mut meals: MealSlots<String> = MealSlots::default();
            let mut ingredients: MealSlots<Vec<String>> = MealSlots::default();

            for part in DayPart::ALL {
                let pick = self.pick_meal(profile.vegan, part, recent.get(part), rng);

                let history = recent.get_mut(part);
                history.push_back(pick.clone());
                if history.len() > LOOKBACK_DAYS {
                    history.pop_front();
                }

                *ingredients.get_mut(part) = self.catalog.meal_ingredients(&pick);
                *meals.get_mut(part) = pick;
            }

            plan.push(DietDay::new(day, meals, ingredients));
        }

        plan
    }

    /// Uniform pick from the pool minus the last two days' picks for this
    /// day-part. If exclusion empties the candidate set (only possible with a
    /// pool no larger than the lookback window) the full pool is used.
    fn pick_meal<R: Rng>(
        &self,
        vegan: bool,
        part: DayPart,
        recent: &VecDeque<String>,
        rng: &mut R,
    ) -> String {
        let pool = self.catalog.meal_pool(vegan, part);
        let eligible: Vec<&&str> = pool
            .iter()
            .filter(|meal| !recent.iter().any(|r| r == **meal))
            .collect();

        let pick = if eligible.is_empty() {
            pool.choose(rng).copied()
        } else {
            eligible.choose(rng).map(|m| **m)
        };

        // Pools are compile-time non-empty, so a pick always exists.
        pick.unwrap_or(pool[0]).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroSplit;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(vegan: bool) -> UserProfile {
        UserProfile {
            name: "test".to_string(),
            age: 30,
            gender: "female".to_string(),
            height_cm: 165.0,
            weight_kg: 60.0,
            goal: "maintain".to_string(),
            active_level: "moderate".to_string(),
            vegan,
            target_weight: None,
        }
    }

    fn targets() -> NutritionTarget {
        NutritionTarget {
            calories: 2000,
            macros: MacroSplit { protein_g: 96, carbs_g: 248, fat_g: 56 },
            bmr: 1350.0,
            tdee: 2090.0,
            bmi: 22.0,
        }
    }

    #[test]
    fn generates_seven_fully_populated_days() {
        let planner = MealPlanner::new(Arc::new(Catalog::new()));
        let mut rng = StdRng::seed_from_u64(1);
        let plan = planner.generate(&profile(false), &targets(), &mut rng);

        assert_eq!(plan.len(), 7);
        for (idx, day) in plan.iter().enumerate() {
            assert_eq!(day.day as usize, idx + 1);
            for part in DayPart::ALL {
                assert!(!day.meals.get(part).is_empty());
                assert!(!day.ingredients.get(part).is_empty());
            }
        }
    }

    #[test]
    fn no_meal_repeats_within_two_days_per_day_part() {
        let planner = MealPlanner::new(Arc::new(Catalog::new()));
        // Many seeds so the lookback is exercised across different draws.
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = planner.generate(&profile(false), &targets(), &mut rng);

            for part in DayPart::ALL {
                let names: Vec<&String> = plan.iter().map(|d| d.meals.get(part)).collect();
                for window in names.windows(3) {
                    assert_ne!(window[0], window[1], "seed {seed}: consecutive repeat");
                    assert_ne!(window[0], window[2], "seed {seed}: repeat within lookback");
                }
            }
        }
    }

    #[test]
    fn vegan_profile_only_draws_from_vegan_pools() {
        let catalog = Arc::new(Catalog::new());
        let planner = MealPlanner::new(catalog.clone());
        let mut rng = StdRng::seed_from_u64(5);
        let plan = planner.generate(&profile(true), &targets(), &mut rng);

        for day in &plan {
            for part in DayPart::ALL {
                let pool = catalog.meal_pool(true, part);
                assert!(pool.contains(&day.meals.get(part).as_str()));
            }
        }
    }
}

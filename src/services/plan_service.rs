use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use crate::models::{
    DayPart, DietDay, Goal, MealDetail, MealPlanResponse, NutritionSummary, NutritionTarget,
    PlanResponse, UserProfile, UserSummary, WorkoutPlanResponse,
};
use crate::services::catalog::Catalog;
use crate::services::errors::PlanError;
use crate::services::grocery_service::GroceryAggregator;
use crate::services::meal_plan_service::MealPlanner;
use crate::services::nutrition_service::NutritionCalculator;
use crate::services::portion_service::PortionEstimator;
use crate::services::progress_service::ProgressProjector;
use crate::services::recipe_service::RecipeResolver;
use crate::services::workout_service::WorkoutScheduler;

/// Projection window bounds when the caller does not ask for a specific
/// number of weeks.
const MIN_PROGRESS_WEEKS: u32 = 8;
const MAX_PROGRESS_WEEKS: u32 = 16;

/// Weeks of progress preview attached to the workout-only payload.
const WORKOUT_PREVIEW_WEEKS: u32 = 4;

/// Composes the whole pipeline: nutrition targets, workout split, weekly
/// meals, portions, recipes, grocery list and progress projection.
#[derive(Clone)]
pub struct PlanOrchestrator {
    nutrition: NutritionCalculator,
    workouts: WorkoutScheduler,
    meals: MealPlanner,
    portions: PortionEstimator,
    recipes: RecipeResolver,
    grocery: GroceryAggregator,
    progress: ProgressProjector,
}

impl PlanOrchestrator {
    pub fn new() -> Self {
        let catalog = Arc::new(Catalog::new());
        Self {
            nutrition: NutritionCalculator::new(),
            workouts: WorkoutScheduler::new(),
            meals: MealPlanner::new(catalog.clone()),
            portions: PortionEstimator::new(catalog.clone()),
            recipes: RecipeResolver::new(catalog.clone()),
            grocery: GroceryAggregator::new(catalog),
            progress: ProgressProjector::new(),
        }
    }

    pub fn generate_full_plan<R: Rng>(
        &self,
        profile: &UserProfile,
        weeks_progress: Option<u32>,
        rng: &mut R,
    ) -> Result<PlanResponse, PlanError> {
        let targets = self.nutrition.compute(profile)?;
        info!(
            calories = targets.calories,
            goal = profile.goal().as_str(),
            "generating full plan for {}",
            profile.name
        );

        let workout_plan = self.workouts.generate(profile, rng);

        let mut diet_plan = self.meals.generate(profile, &targets, rng);
        self.enrich_diet_plan(&mut diet_plan, &targets, profile.goal());

        let grocery_list = self.grocery.aggregate(&diet_plan);

        let time_estimate = self.progress.time_to_target(profile);
        let weeks = weeks_progress.unwrap_or_else(|| {
            time_estimate
                .weeks_to_target
                .clamp(MIN_PROGRESS_WEEKS, MAX_PROGRESS_WEEKS)
        });
        let progress_prediction = self.progress.project(profile, weeks);

        Ok(PlanResponse {
            user_info: user_summary(profile),
            nutrition: nutrition_summary(&targets),
            workout_plan,
            diet_plan,
            grocery_list,
            progress_prediction,
            time_estimate,
        })
    }

    pub fn generate_meal_plan<R: Rng>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> Result<MealPlanResponse, PlanError> {
        let targets = self.nutrition.compute(profile)?;

        let mut meal_plan = self.meals.generate(profile, &targets, rng);
        self.enrich_diet_plan(&mut meal_plan, &targets, profile.goal());

        let grocery_list = self.grocery.aggregate(&meal_plan);

        Ok(MealPlanResponse {
            nutrition: nutrition_summary(&targets),
            meal_plan,
            grocery_list,
        })
    }

    pub fn generate_workout_plan<R: Rng>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> Result<WorkoutPlanResponse, PlanError> {
        self.nutrition.validate(profile)?;

        Ok(WorkoutPlanResponse {
            workout_plan: self.workouts.generate(profile, rng),
            progress_prediction: self.progress.project(profile, WORKOUT_PREVIEW_WEEKS),
        })
    }

    /// Fill in portions, per-ingredient recipes and the meal recipe for every
    /// day-part. A failed recipe resolution degrades only that one meal: its
    /// portions are kept and the detail slot carries a tagged failure.
    fn enrich_diet_plan(&self, diet_plan: &mut [DietDay], targets: &NutritionTarget, goal: Goal) {
        for day in diet_plan {
            for part in DayPart::ALL {
                let meal_name = day.meals.get(part).clone();
                let ingredients = day.ingredients.get(part).clone();

                let portions = self.portions.estimate(&ingredients, &targets.macros, goal);

                match self.recipes.resolve_meal(&meal_name, &portions) {
                    Ok(recipe) => {
                        *day.recipes.get_mut(part) = portions
                            .iter()
                            .map(|p| self.recipes.resolve_ingredient(&p.food, p.grams))
                            .collect();
                        *day.meal_details.get_mut(part) = Some(MealDetail::Ok(recipe));
                    }
                    Err(err) => {
                        warn!(
                            day = day.day,
                            part = part.as_str(),
                            %err,
                            "recipe resolution failed, degrading meal"
                        );
                        *day.recipes.get_mut(part) = Vec::new();
                        *day.meal_details.get_mut(part) = Some(MealDetail::Failed {
                            meal: meal_name.clone(),
                            error: err.to_string(),
                        });
                    }
                }

                *day.portions.get_mut(part) = portions;
            }
        }
    }
}

impl Default for PlanOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

fn user_summary(profile: &UserProfile) -> UserSummary {
    UserSummary {
        name: profile.name.clone(),
        goal: profile.goal.clone(),
        vegan: profile.vegan,
        active_level: profile.active_level.clone(),
    }
}

fn nutrition_summary(targets: &NutritionTarget) -> NutritionSummary {
    NutritionSummary {
        calories_target: targets.calories,
        macros_target: targets.macros.clone(),
        bmr: targets.bmr,
        tdee: targets.tdee,
        bmi: targets.bmi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(goal: &str, vegan: bool) -> UserProfile {
        UserProfile {
            name: "Ari".to_string(),
            age: 28,
            gender: "male".to_string(),
            height_cm: 172.0,
            weight_kg: 68.0,
            goal: goal.to_string(),
            active_level: "moderate".to_string(),
            vegan,
            target_weight: None,
        }
    }

    #[test]
    fn full_plan_is_structurally_complete() {
        let orchestrator = PlanOrchestrator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let plan = orchestrator
            .generate_full_plan(&profile("fat_loss", false), None, &mut rng)
            .unwrap();

        assert_eq!(plan.workout_plan.len(), 7);
        assert_eq!(plan.diet_plan.len(), 7);
        assert!(!plan.grocery_list.is_empty());
        assert!(!plan.progress_prediction.is_empty());

        for day in &plan.diet_plan {
            for part in DayPart::ALL {
                assert!(!day.portions.get(part).is_empty());
                assert!(!day.recipes.get(part).is_empty());
                assert!(matches!(
                    day.meal_details.get(part),
                    Some(MealDetail::Ok(_))
                ));
            }
        }
    }

    #[test]
    fn default_projection_window_is_clamped() {
        let orchestrator = PlanOrchestrator::new();
        let mut rng = StdRng::seed_from_u64(3);

        // maintain -> 0 weeks to target -> clamped up to 8.
        let plan = orchestrator
            .generate_full_plan(&profile("maintain", false), None, &mut rng)
            .unwrap();
        assert_eq!(plan.progress_prediction.len(), 9);

        // Explicit request wins over the derived window.
        let plan = orchestrator
            .generate_full_plan(&profile("maintain", false), Some(12), &mut rng)
            .unwrap();
        assert_eq!(plan.progress_prediction.len(), 13);
    }

    #[test]
    fn invalid_profile_is_rejected_before_any_generation() {
        let orchestrator = PlanOrchestrator::new();
        let mut rng = StdRng::seed_from_u64(4);
        let mut bad = profile("maintain", false);
        bad.age = 12;

        assert!(orchestrator.generate_full_plan(&bad, None, &mut rng).is_err());
        assert!(orchestrator.generate_meal_plan(&bad, &mut rng).is_err());
        assert!(orchestrator.generate_workout_plan(&bad, &mut rng).is_err());
    }

    #[test]
    fn meal_plan_only_payload_has_no_workouts() {
        let orchestrator = PlanOrchestrator::new();
        let mut rng = StdRng::seed_from_u64(5);
        let plan = orchestrator
            .generate_meal_plan(&profile("muscle_gain", true), &mut rng)
            .unwrap();

        assert_eq!(plan.meal_plan.len(), 7);
        assert_eq!(
            plan.grocery_list.last().unwrap().item,
            crate::models::GROCERY_TOTAL_ROW
        );
    }

    #[test]
    fn workout_plan_only_uses_the_preview_window() {
        let orchestrator = PlanOrchestrator::new();
        let mut rng = StdRng::seed_from_u64(6);
        let plan = orchestrator
            .generate_workout_plan(&profile("fat_loss", false), &mut rng)
            .unwrap();

        assert_eq!(plan.workout_plan.len(), 7);
        assert_eq!(plan.progress_prediction.len(), 5); // weeks 0..=4
    }
}

use tracing::debug;

use crate::models::{activity_factor, Gender, Goal, MacroSplit, NutritionTarget, UserProfile};
use crate::services::errors::PlanError;

const CALORIE_CEILING: i64 = 4000;
const CALORIE_FLOOR_FEMALE: i64 = 1200;
const CALORIE_FLOOR_MALE: i64 = 1500;

/// Derives BMR, TDEE, the goal-adjusted calorie target and the macro split
/// from a profile. Deterministic and side-effect free.
#[derive(Debug, Clone, Default)]
pub struct NutritionCalculator;

impl NutritionCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Range checks that must pass before any plan computation runs.
    pub fn validate(&self, profile: &UserProfile) -> Result<(), PlanError> {
        if profile.age <= 0 || profile.weight_kg <= 0.0 || profile.height_cm <= 0.0 {
            return Err(PlanError::Validation(
                "Age, weight, and height must be positive".to_string(),
            ));
        }
        if !(15..=80).contains(&profile.age) {
            return Err(PlanError::Validation(
                "Age must be between 15 and 80 for accurate calculation".to_string(),
            ));
        }
        if !(30.0..=200.0).contains(&profile.weight_kg) {
            return Err(PlanError::Validation(
                "Weight must be between 30kg and 200kg".to_string(),
            ));
        }
        if !(100.0..=250.0).contains(&profile.height_cm) {
            return Err(PlanError::Validation(
                "Height must be between 100cm and 250cm".to_string(),
            ));
        }
        Ok(())
    }

    pub fn compute(&self, profile: &UserProfile) -> Result<NutritionTarget, PlanError> {
        self.validate(profile)?;

        let bmr = self.bmr(profile);
        let tdee = bmr * activity_factor(&profile.active_level);
        let bmi = profile.bmi();

        let adjusted = self.goal_adjusted(tdee, bmi, profile.goal());
        let floor = match profile.gender() {
            Gender::Female => CALORIE_FLOOR_FEMALE,
            Gender::Male => CALORIE_FLOOR_MALE,
        };
        let calories = (adjusted.round() as i64).clamp(floor, CALORIE_CEILING);

        let macros = self.macros(calories, profile);
        debug!(
            calories,
            bmr, tdee, bmi, "computed nutrition target for {}", profile.name
        );

        Ok(NutritionTarget {
            calories,
            macros,
            bmr,
            tdee,
            bmi,
        })
    }

    /// Mifflin-St Jeor resting energy estimate.
    fn bmr(&self, profile: &UserProfile) -> f64 {
        let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f64;
        match profile.gender() {
            Gender::Male => base + 5.0,
            Gender::Female => base - 161.0,
        }
    }

    /// Surplus/deficit tiered by BMI bracket: leaner users get the larger
    /// surplus and the smaller deficit, heavier users the reverse.
    fn goal_adjusted(&self, tdee: f64, bmi: f64, goal: Goal) -> f64 {
        match goal {
            Goal::MuscleGain => {
                let pct = if bmi < 20.0 {
                    0.12
                } else if bmi < 25.0 {
                    0.10
                } else if bmi < 30.0 {
                    0.07
                } else {
                    0.05
                };
                tdee + tdee * pct
            }
            Goal::FatLoss => {
                let pct = if bmi < 20.0 {
                    0.12
                } else if bmi < 25.0 {
                    0.15
                } else if bmi < 30.0 {
                    0.20
                } else {
                    0.25
                };
                tdee - tdee * pct
            }
            Goal::Maintain => tdee,
        }
    }

    fn macros(&self, calories: i64, profile: &UserProfile) -> MacroSplit {
        let goal = profile.goal();

        let protein_per_kg = match goal {
            Goal::FatLoss => 2.0,
            Goal::MuscleGain => 1.8,
            Goal::Maintain => 1.6,
        };
        let protein_g = profile.weight_kg * protein_per_kg;
        let protein_cal = protein_g * 4.0;

        let fat_pct = if goal == Goal::FatLoss { 0.20 } else { 0.25 };
        let fat_cal = calories as f64 * fat_pct;
        let fat_g = fat_cal / 9.0;

        // Remainder in kcal goes to carbs; can be negative for extreme
        // profiles (very heavy user pinned at the calorie floor) and is
        // reported as-is rather than clamped.
        let carbs_g = (calories as f64 - protein_cal - fat_cal) / 4.0;

        MacroSplit {
            protein_g: protein_g.round() as i64,
            carbs_g: carbs_g.round() as i64,
            fat_g: fat_g.round() as i64,
        }
    }
}

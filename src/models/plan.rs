use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily macro targets in grams.
///
/// `carbs_g` is the calorie remainder after protein and fat and can go
/// negative for extreme profiles (very heavy user at the calorie floor);
/// it is reported as computed rather than silently clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

/// Calorie and macro targets derived from a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionTarget {
    pub calories: i64,
    pub macros: MacroSplit,
    pub bmr: f64,
    pub tdee: f64,
    pub bmi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutDayType {
    Push,
    Pull,
    Leg,
    Rest,
}

impl WorkoutDayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutDayType::Push => "push",
            WorkoutDayType::Pull => "pull",
            WorkoutDayType::Leg => "leg",
            WorkoutDayType::Rest => "rest",
        }
    }
}

/// One entry in a day's workout listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutEntry {
    Strength {
        name: String,
        sets: u32,
        reps: String,
        rest: String,
    },
    Cardio {
        name: String,
        duration: String,
        intensity: String,
    },
    Rest {
        name: String,
    },
}

impl WorkoutEntry {
    pub fn name(&self) -> &str {
        match self {
            WorkoutEntry::Strength { name, .. }
            | WorkoutEntry::Cardio { name, .. }
            | WorkoutEntry::Rest { name } => name,
        }
    }
}

/// One day of the 7-day workout split. Never mutated after generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: u8,
    #[serde(rename = "type")]
    pub day_type: WorkoutDayType,
    pub workout: Vec<WorkoutEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_exercises: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
}

/// The three meal slots of a day, used for meal names, ingredient lists,
/// portions, recipes and per-meal details alike.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealSlots<T> {
    pub breakfast: T,
    pub lunch: T,
    pub dinner: T,
}

impl<T> MealSlots<T> {
    pub fn get(&self, part: DayPart) -> &T {
        match part {
            DayPart::Breakfast => &self.breakfast,
            DayPart::Lunch => &self.lunch,
            DayPart::Dinner => &self.dinner,
        }
    }

    pub fn get_mut(&mut self, part: DayPart) -> &mut T {
        match part {
            DayPart::Breakfast => &mut self.breakfast,
            DayPart::Lunch => &mut self.lunch,
            DayPart::Dinner => &mut self.dinner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPart {
    Breakfast,
    Lunch,
    Dinner,
}

impl DayPart {
    pub const ALL: [DayPart; 3] = [DayPart::Breakfast, DayPart::Lunch, DayPart::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayPart::Breakfast => "breakfast",
            DayPart::Lunch => "lunch",
            DayPart::Dinner => "dinner",
        }
    }

    /// Gram estimate per ingredient when a meal has no computed portions.
    pub fn default_grams(&self) -> f64 {
        match self {
            DayPart::Breakfast => 80.0,
            DayPart::Lunch => 120.0,
            DayPart::Dinner => 100.0,
        }
    }
}

/// A single ingredient portion in grams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portion {
    pub food: String,
    pub grams: f64,
}

/// One day of the weekly diet plan. The meal planner fills `meals` and
/// `ingredients`; the orchestrator enriches portions, recipes and
/// meal details afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietDay {
    pub day: u8,
    pub meals: MealSlots<String>,
    pub ingredients: MealSlots<Vec<String>>,
    #[serde(default)]
    pub portions: MealSlots<Vec<Portion>>,
    #[serde(default)]
    pub recipes: MealSlots<Vec<IngredientRecipe>>,
    #[serde(default)]
    pub meal_details: MealSlots<Option<MealDetail>>,
}

impl DietDay {
    pub fn new(day: u8, meals: MealSlots<String>, ingredients: MealSlots<Vec<String>>) -> Self {
        Self {
            day,
            meals,
            ingredients,
            portions: MealSlots::default(),
            recipes: MealSlots::default(),
            meal_details: MealSlots::default(),
        }
    }
}

/// Per-ingredient line of a meal recipe's cost estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCost {
    pub ingredient: String,
    pub grams: i64,
    pub cost_per_100g: i64,
    pub ingredient_cost: i64,
}

/// A resolved meal recipe: template scaled against the computed portions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecipe {
    pub meal: String,
    pub ingredients: BTreeMap<String, i64>,
    pub steps: Vec<String>,
    pub notes: String,
    pub estimated_cost: i64,
    pub cost_breakdown: Vec<IngredientCost>,
    pub portion_count: usize,
}

/// Preparation guidance and cost for a single portioned ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRecipe {
    pub food: String,
    pub grams: i64,
    pub cooking_method: String,
    pub estimated_cost: i64,
    pub cost_per_100g: i64,
}

/// Outcome of resolving one meal's recipe. A failed resolution degrades only
/// this slot; the rest of the plan is unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MealDetail {
    Ok(MealRecipe),
    Failed { meal: String, error: String },
}

/// Total and per-ingredient cost estimate for one meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCost {
    pub meal: String,
    pub estimated_cost: i64,
    pub cost_breakdown: Vec<IngredientCost>,
}

/// Aggregated weekly grocery line. The final list carries a synthetic
/// "TOTAL WEEKLY COST" row summing the real rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryItem {
    pub item: String,
    pub total_grams: f64,
    pub total_cost: i64,
}

pub const GROCERY_TOTAL_ROW: &str = "TOTAL WEEKLY COST";

/// One simulated week of the weight trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub week: u32,
    pub predicted_weight: f64,
    pub weight_change: f64,
    pub weekly_goal: f64,
}

/// How long reaching the target weight should take, with a realism flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub weeks_to_target: u32,
    pub months_to_target: f64,
    pub is_achievable: bool,
    pub message: String,
    pub weekly_change_goal: f64,
}

/// Summary block echoed back with every plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub goal: String,
    pub vegan: bool,
    pub active_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub calories_target: i64,
    pub macros_target: MacroSplit,
    pub bmr: f64,
    pub tdee: f64,
    pub bmi: f64,
}

/// Full plan payload returned by the orchestrator and persisted as history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub user_info: UserSummary,
    pub nutrition: NutritionSummary,
    pub workout_plan: Vec<WorkoutDay>,
    pub diet_plan: Vec<DietDay>,
    pub grocery_list: Vec<GroceryItem>,
    pub progress_prediction: Vec<ProgressPoint>,
    pub time_estimate: TimeEstimate,
}

/// Payload for the meal-plan-only endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanResponse {
    pub nutrition: NutritionSummary,
    pub meal_plan: Vec<DietDay>,
    pub grocery_list: Vec<GroceryItem>,
}

/// Payload for the workout-plan-only endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanResponse {
    pub workout_plan: Vec<WorkoutDay>,
    pub progress_prediction: Vec<ProgressPoint>,
}

/// A previously generated plan stored for a user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlanHistoryEntry {
    pub id: uuid::Uuid,
    pub plan_json: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_detail_serializes_with_a_status_tag() {
        let failed = MealDetail::Failed {
            meal: "Chicken Porridge".to_string(),
            error: "portion is missing its food name".to_string(),
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["meal"], "Chicken Porridge");

        let ok = MealDetail::Ok(MealRecipe {
            meal: "Peanut Butter Toast".to_string(),
            ingredients: BTreeMap::from([("bread".to_string(), 50)]),
            steps: vec!["Spread peanut butter on toasted bread.".to_string()],
            notes: "Quick and practical.".to_string(),
            estimated_cost: 4000,
            cost_breakdown: Vec::new(),
            portion_count: 1,
        });
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["ingredients"]["bread"], 50);
    }

    #[test]
    fn workout_entries_are_tagged_by_type() {
        let entry = WorkoutEntry::Strength {
            name: "Bench Press".to_string(),
            sets: 3,
            reps: "8-12".to_string(),
            rest: "60-90s".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "strength");

        let rest = WorkoutEntry::Rest { name: "Rest - Recovery".to_string() };
        assert_eq!(serde_json::to_value(&rest).unwrap()["type"], "rest");
    }
}

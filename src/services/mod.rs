// Business logic services

pub mod catalog;
pub mod errors;
pub mod grocery_service;
pub mod history_service;
pub mod meal_plan_service;
pub mod nutrition_service;
pub mod plan_service;
pub mod portion_service;
pub mod progress_service;
pub mod recipe_service;
pub mod workout_service;

pub use catalog::Catalog;
pub use errors::PlanError;
pub use grocery_service::GroceryAggregator;
pub use history_service::HistoryService;
pub use meal_plan_service::MealPlanner;
pub use nutrition_service::NutritionCalculator;
pub use plan_service::PlanOrchestrator;
pub use portion_service::PortionEstimator;
pub use progress_service::ProgressProjector;
pub use recipe_service::RecipeResolver;
pub use workout_service::WorkoutScheduler;

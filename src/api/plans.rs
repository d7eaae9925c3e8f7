use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{jwt_auth_middleware, AuthService, UserSession};
use crate::models::{
    MealPlanResponse, PlanHistoryEntry, PlanResponse, UserProfile, WorkoutPlanResponse,
};
use crate::services::{HistoryService, PlanError, PlanOrchestrator};

#[derive(Clone)]
pub struct PlanState {
    pub orchestrator: PlanOrchestrator,
    pub history: HistoryService,
}

/// Plan generation routes (no auth required)
pub fn plan_routes(state: PlanState) -> Router {
    Router::new()
        .route("/full", post(generate_full_plan))
        .route("/meals", post(generate_meal_plan))
        .route("/workouts", post(generate_workout_plan))
        .with_state(state)
}

/// Plan history routes (JWT protected)
pub fn history_routes(state: PlanState, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", post(save_history).get(get_history))
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct FullPlanRequest {
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Override for the progress projection window, in weeks.
    pub weeks_progress: Option<u32>,
}

/// Generate a complete plan: nutrition, workouts, meals, grocery, progress
#[tracing::instrument(skip(state, request), fields(user = %request.profile.name))]
async fn generate_full_plan(
    State(state): State<PlanState>,
    Json(request): Json<FullPlanRequest>,
) -> Result<Json<PlanResponse>, PlanError> {
    let mut rng = StdRng::from_entropy();
    let plan = state
        .orchestrator
        .generate_full_plan(&request.profile, request.weeks_progress, &mut rng)?;
    Ok(Json(plan))
}

/// Generate the meal plan and grocery list only
#[tracing::instrument(skip(state, profile), fields(user = %profile.name))]
async fn generate_meal_plan(
    State(state): State<PlanState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<MealPlanResponse>, PlanError> {
    let mut rng = StdRng::from_entropy();
    let plan = state.orchestrator.generate_meal_plan(&profile, &mut rng)?;
    Ok(Json(plan))
}

/// Generate the workout split only
#[tracing::instrument(skip(state, profile), fields(user = %profile.name))]
async fn generate_workout_plan(
    State(state): State<PlanState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<WorkoutPlanResponse>, PlanError> {
    let mut rng = StdRng::from_entropy();
    let plan = state.orchestrator.generate_workout_plan(&profile, &mut rng)?;
    Ok(Json(plan))
}

/// Store a generated plan for the authenticated user
#[tracing::instrument(skip(state, plan), fields(user_id = %session.user_id))]
async fn save_history(
    State(state): State<PlanState>,
    Extension(session): Extension<UserSession>,
    Json(plan): Json<Value>,
) -> Result<Json<Value>, PlanError> {
    let id = state.history.save(session.user_id, &plan).await?;
    Ok(Json(json!({ "id": id, "message": "Plan saved" })))
}

/// List the authenticated user's stored plans, newest first
#[tracing::instrument(skip(state), fields(user_id = %session.user_id))]
async fn get_history(
    State(state): State<PlanState>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<Vec<PlanHistoryEntry>>, PlanError> {
    let entries = state.history.list(session.user_id).await?;
    Ok(Json(entries))
}

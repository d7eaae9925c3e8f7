use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use super::auth::auth_routes;
use super::health::health_check;
use super::plans::{history_routes, plan_routes, PlanState};
use crate::auth::{cors_layer, AuthService};
use crate::services::{HistoryService, PlanOrchestrator};

pub fn create_routes(db: PgPool, jwt_secret: &str) -> Router {
    let auth_service = AuthService::new(db.clone(), jwt_secret);
    let plan_state = PlanState {
        orchestrator: PlanOrchestrator::new(),
        history: HistoryService::new(db),
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes(auth_service.clone()))
        .nest("/api/plans", plan_routes(plan_state.clone()))
        .nest("/api/history", history_routes(plan_state, auth_service))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

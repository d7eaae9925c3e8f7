use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::PlanHistoryEntry;
use crate::services::errors::PlanError;

/// Insert-only storage of generated plans, one JSON document per row.
#[derive(Clone)]
pub struct HistoryService {
    db: PgPool,
}

impl HistoryService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn save(&self, user_id: Uuid, plan: &serde_json::Value) -> Result<Uuid, PlanError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO plan_history (user_id, plan_json)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(plan)
        .fetch_one(&self.db)
        .await?;

        info!(%user_id, plan_id = %id, "saved plan to history");
        Ok(id)
    }

    /// All stored plans for a user, newest first.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<PlanHistoryEntry>, PlanError> {
        let entries = sqlx::query_as::<_, PlanHistoryEntry>(
            r#"
            SELECT id, plan_json, created_at
            FROM plan_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }
}

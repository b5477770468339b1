//! Repository for the `milestones` table.

use promotor_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::milestone::{CreateMilestone, Milestone};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, promotion_id, name, due_date, status, priority, dependencies, created_at, updated_at";

/// Provides CRUD operations for promotion milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Insert a new milestone, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateMilestone,
    ) -> Result<Milestone, sqlx::Error> {
        let query = format!(
            "INSERT INTO milestones (promotion_id, name, due_date, status, priority, dependencies)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(input.promotion_id)
            .bind(&input.name)
            .bind(input.due_date)
            .bind(input.status)
            .bind(input.priority)
            .bind(&input.dependencies)
            .fetch_one(executor)
            .await
    }

    /// Find a milestone by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestones WHERE id = $1");
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the milestones owned by a promotion, ordered by due date.
    pub async fn list_for_promotion(
        pool: &PgPool,
        promotion_id: DbId,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM milestones WHERE promotion_id = $1 ORDER BY due_date, id"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(promotion_id)
            .fetch_all(pool)
            .await
    }
}

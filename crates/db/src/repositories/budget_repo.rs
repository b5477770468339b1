//! Repository for the `budgets` table.

use promotor_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::budget::{Budget, CreateBudget};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, promotion_id, channel, total_amount, advertising, discounts, \
                       influencer, creative, created_at, updated_at";

/// Provides CRUD operations for budget allocations.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Insert a new budget allocation, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateBudget,
    ) -> Result<Budget, sqlx::Error> {
        let query = format!(
            "INSERT INTO budgets (promotion_id, channel, total_amount, advertising, discounts,
                                  influencer, creative)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(input.promotion_id)
            .bind(&input.channel)
            .bind(input.total_amount)
            .bind(input.advertising)
            .bind(input.discounts)
            .bind(input.influencer)
            .bind(input.creative)
            .fetch_one(executor)
            .await
    }

    /// Find a budget allocation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets WHERE id = $1");
        sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the budget allocations owned by a promotion, oldest first.
    pub async fn list_for_promotion(
        pool: &PgPool,
        promotion_id: DbId,
    ) -> Result<Vec<Budget>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM budgets WHERE promotion_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(promotion_id)
            .fetch_all(pool)
            .await
    }
}

//! Repository for the `promotions` table.

use chrono::NaiveDate;
use promotor_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::dashboard::PromotionWithBudget;
use crate::models::promotion::{CreatePromotion, Promotion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status, promotion_type, channels, start_date, \
                       end_date, discount_rate, gmv_target, gmv_actual, created_at, updated_at";

/// Promotion columns plus the summed budget, for the listing queries.
///
/// `SUM` over BIGINT yields NUMERIC, hence the cast back to BIGINT.
const BUDGET_COLUMNS: &str =
    "p.id, p.name, p.description, p.status, p.promotion_type, p.channels, p.start_date, \
     p.end_date, p.discount_rate, p.gmv_target, p.gmv_actual, \
     COALESCE(SUM(b.total_amount), 0)::BIGINT AS total_budget";

/// Provides CRUD and listing operations for promotions.
pub struct PromotionRepo;

impl PromotionRepo {
    /// Insert a new promotion, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreatePromotion,
    ) -> Result<Promotion, sqlx::Error> {
        let query = format!(
            "INSERT INTO promotions (name, description, status, promotion_type, channels,
                                     start_date, end_date, discount_rate, gmv_target, gmv_actual)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.promotion_type)
            .bind(&input.channels)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.discount_rate)
            .bind(input.gmv_target)
            .bind(input.gmv_actual)
            .fetch_one(executor)
            .await
    }

    /// Find a promotion by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Promotion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM promotions WHERE id = $1");
        sqlx::query_as::<_, Promotion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active promotions with their summed budgets.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<PromotionWithBudget>, sqlx::Error> {
        let query = format!(
            "SELECT {BUDGET_COLUMNS}
             FROM promotions p
             LEFT JOIN budgets b ON b.promotion_id = p.id
             WHERE p.status = 'active'
             GROUP BY p.id
             ORDER BY p.start_date, p.id"
        );
        sqlx::query_as::<_, PromotionWithBudget>(&query)
            .fetch_all(pool)
            .await
    }

    /// List upcoming promotions with their summed budgets.
    ///
    /// Upcoming means scheduled or draft with a start date on or after
    /// `today`, ordered by start date ascending.
    pub async fn list_upcoming(
        pool: &PgPool,
        today: NaiveDate,
    ) -> Result<Vec<PromotionWithBudget>, sqlx::Error> {
        let query = format!(
            "SELECT {BUDGET_COLUMNS}
             FROM promotions p
             LEFT JOIN budgets b ON b.promotion_id = p.id
             WHERE p.status IN ('scheduled', 'draft') AND p.start_date >= $1
             GROUP BY p.id
             ORDER BY p.start_date, p.id"
        );
        sqlx::query_as::<_, PromotionWithBudget>(&query)
            .bind(today)
            .fetch_all(pool)
            .await
    }

    /// Delete a promotion by ID. Returns `true` if a row was removed.
    ///
    /// Milestones, budgets, and calendar events owned by the promotion are
    /// removed by the cascade rules.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

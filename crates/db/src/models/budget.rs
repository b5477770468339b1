//! Budget allocation model and DTOs.

use promotor_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `budgets` table.
///
/// All amounts are KRW. The category sub-amounts are informational
/// breakdowns; `total_amount` is stored independently and is not required to
/// equal their sum.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: DbId,
    pub promotion_id: DbId,
    pub channel: String,
    pub total_amount: i64,
    pub advertising: i64,
    pub discounts: i64,
    pub influencer: i64,
    pub creative: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a budget allocation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudget {
    pub promotion_id: DbId,
    pub channel: String,
    pub total_amount: i64,
    pub advertising: i64,
    pub discounts: i64,
    pub influencer: i64,
    pub creative: i64,
}

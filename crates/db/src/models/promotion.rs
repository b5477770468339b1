//! Promotion entity model and DTOs.

use chrono::NaiveDate;
use promotor_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle status of a promotion.
///
/// Transitions are not enforced by this layer; callers own the state
/// machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "promotion_status", rename_all = "snake_case")]
pub enum PromotionStatus {
    Draft,
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

/// Commercial shape of a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "promotion_type", rename_all = "snake_case")]
pub enum PromotionType {
    FlashSale,
    Seasonal,
    Bundle,
    BrandEvent,
    ChannelExclusive,
}

/// A row from the `promotions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Promotion {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: PromotionStatus,
    pub promotion_type: PromotionType,
    /// Channel codes the promotion runs on, in display order.
    pub channels: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Free-form discount descriptor, e.g. "15%".
    pub discount_rate: Option<String>,
    /// GMV target in KRW.
    pub gmv_target: Option<i64>,
    /// GMV achieved so far in KRW.
    pub gmv_actual: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a promotion.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePromotion {
    pub name: String,
    pub description: Option<String>,
    pub status: PromotionStatus,
    pub promotion_type: PromotionType,
    pub channels: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub discount_rate: Option<String>,
    pub gmv_target: Option<i64>,
    pub gmv_actual: Option<i64>,
}

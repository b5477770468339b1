//! Cross-entity view rows and aggregates for the dashboard queries.

use chrono::NaiveDate;
use promotor_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::calendar_event::EventType;
use crate::models::inventory::InventoryStatus;
use crate::models::promotion::{PromotionStatus, PromotionType};

/// A promotion row joined with the sum of its budget allocations.
///
/// `total_budget` is `COALESCE(SUM(total_amount), 0)` over the promotion's
/// budgets; a promotion with no budgets reports 0.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromotionWithBudget {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: PromotionStatus,
    #[serde(rename = "type")]
    pub promotion_type: PromotionType,
    pub channels: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub discount_rate: Option<String>,
    pub gmv_target: Option<i64>,
    pub gmv_actual: Option<i64>,
    pub total_budget: i64,
}

/// A calendar event joined with its promotion's current status, when linked.
#[derive(Debug, Clone, FromRow)]
pub struct CalendarEntryRow {
    pub id: DbId,
    pub promotion_id: Option<DbId>,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub title: String,
    pub description: Option<String>,
    pub promotion_status: Option<PromotionStatus>,
}

/// An inventory row joined with its product's name and SKU.
#[derive(Debug, Clone, FromRow)]
pub struct InventoryItemRow {
    pub id: DbId,
    pub product_id: DbId,
    pub product_name: String,
    pub product_sku: Option<String>,
    pub channel: String,
    pub current_stock: i32,
    pub daily_sales_avg: i32,
    pub status: InventoryStatus,
}

/// Row counts per inventory status across the full four-value domain.
///
/// Statuses with no rows report 0.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventorySummary {
    pub healthy: i64,
    pub low_stock: i64,
    pub critical: i64,
    pub out_of_stock: i64,
}

/// Unacknowledged alert counts partitioned by severity.
///
/// `total` counts every unacknowledged alert, including info-level ones that
/// have no dedicated field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertCounts {
    pub critical: i64,
    pub warning: i64,
    pub total: i64,
}

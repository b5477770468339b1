//! Per-channel inventory model and DTOs.

use promotor_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stock level classification for one product on one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "inventory_status", rename_all = "snake_case")]
pub enum InventoryStatus {
    Healthy,
    LowStock,
    Critical,
    OutOfStock,
}

/// A row from the `inventories` table.
///
/// One row per (product, channel) pair; the pair is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inventory {
    pub id: DbId,
    pub product_id: DbId,
    pub channel: String,
    pub current_stock: i32,
    /// Average units sold per day on this channel.
    pub daily_sales_avg: i32,
    pub status: InventoryStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an inventory record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventory {
    pub product_id: DbId,
    pub channel: String,
    pub current_stock: i32,
    pub daily_sales_avg: i32,
    pub status: InventoryStatus,
}

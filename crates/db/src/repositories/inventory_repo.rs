//! Repository for the `inventories` table.

use promotor_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::dashboard::{InventoryItemRow, InventorySummary};
use crate::models::inventory::{CreateInventory, Inventory, InventoryStatus};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, product_id, channel, current_stock, daily_sales_avg, status, created_at, updated_at";

/// Provides CRUD operations for per-channel inventory records.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Insert a new inventory record, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateInventory,
    ) -> Result<Inventory, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventories (product_id, channel, current_stock, daily_sales_avg, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(input.product_id)
            .bind(&input.channel)
            .bind(input.current_stock)
            .bind(input.daily_sales_avg)
            .bind(input.status)
            .fetch_one(executor)
            .await
    }

    /// Find an inventory record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventories WHERE id = $1");
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every inventory row joined with its product's name and SKU,
    /// ordered by product name then channel.
    pub async fn list_with_product(pool: &PgPool) -> Result<Vec<InventoryItemRow>, sqlx::Error> {
        sqlx::query_as::<_, InventoryItemRow>(
            "SELECT i.id, i.product_id, p.name AS product_name, p.sku AS product_sku,
                    i.channel, i.current_stock, i.daily_sales_avg, i.status
             FROM inventories i
             JOIN products p ON p.id = i.product_id
             ORDER BY p.name, i.channel",
        )
        .fetch_all(pool)
        .await
    }

    /// Count rows per status across the full four-value domain.
    ///
    /// Statuses with no rows report 0.
    pub async fn status_summary(pool: &PgPool) -> Result<InventorySummary, sqlx::Error> {
        let rows: Vec<(InventoryStatus, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM inventories GROUP BY status")
                .fetch_all(pool)
                .await?;

        let mut summary = InventorySummary::default();
        for (status, count) in rows {
            match status {
                InventoryStatus::Healthy => summary.healthy = count,
                InventoryStatus::LowStock => summary.low_stock = count,
                InventoryStatus::Critical => summary.critical = count,
                InventoryStatus::OutOfStock => summary.out_of_stock = count,
            }
        }
        Ok(summary)
    }
}

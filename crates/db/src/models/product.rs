//! Product entity model and DTOs.

use promotor_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub brand: String,
    /// Stock keeping unit; unique across products when present.
    pub sku: Option<String>,
    /// Retail price in KRW.
    pub price: i32,
    /// Minimum advertised price in KRW.
    pub map_price: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub sku: Option<String>,
    pub price: i32,
    pub map_price: Option<i32>,
}

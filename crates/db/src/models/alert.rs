//! Alert entity model and DTOs.

use promotor_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Subsystem an alert originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "alert_type", rename_all = "snake_case")]
pub enum AlertType {
    Inventory,
    Price,
    Channel,
    Promotion,
    System,
}

/// Severity of an alert.
///
/// Declaration order is significant: the active-alerts listing sorts by this
/// enum's database declaration order (critical, warning, info).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "alert_severity", rename_all = "snake_case")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

/// A row from the `alerts` table.
///
/// `acknowledged` starts false; acknowledging is terminal, there is no
/// un-acknowledge operation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alert {
    pub id: DbId,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub channel: Option<String>,
    pub acknowledged: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an alert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlert {
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub channel: Option<String>,
}

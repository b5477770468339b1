//! Repository for the `alerts` table.

use promotor_core::types::{DbId, Timestamp};
use sqlx::{PgExecutor, PgPool};

use crate::models::alert::{Alert, CreateAlert};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, alert_type, severity, title, message, channel, acknowledged, created_at, updated_at";

/// Provides CRUD operations for alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert a new alert, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateAlert,
    ) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (alert_type, severity, title, message, channel)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(input.alert_type)
            .bind(input.severity)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.channel)
            .fetch_one(executor)
            .await
    }

    /// Find an alert by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alerts WHERE id = $1");
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List unacknowledged alerts, most severe first.
    ///
    /// `alert_severity` is a native enum, so ORDER BY follows its declaration
    /// order (critical, warning, info); ties break by newest first, then by
    /// id so equal timestamps (e.g. rows from one transaction) still order
    /// totally.
    pub async fn list_unacknowledged(pool: &PgPool) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts
             WHERE acknowledged = false
             ORDER BY severity, created_at DESC, id"
        );
        sqlx::query_as::<_, Alert>(&query).fetch_all(pool).await
    }

    /// Mark an alert acknowledged, returning the acknowledgment timestamp.
    ///
    /// Returns `None` if no alert with the given ID exists. Does not filter
    /// on `acknowledged = false`: re-acknowledging an already acknowledged
    /// alert succeeds and refreshes the timestamp.
    pub async fn acknowledge(pool: &PgPool, id: DbId) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE alerts SET acknowledged = true WHERE id = $1 RETURNING updated_at",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}

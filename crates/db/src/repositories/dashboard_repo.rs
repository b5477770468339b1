//! Aggregation queries backing the dashboard metrics view.

use sqlx::PgPool;

use crate::models::alert::AlertSeverity;
use crate::models::dashboard::AlertCounts;

/// Provides the headline counts for the dashboard metrics endpoint.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Count promotions with status `active`.
    pub async fn active_promotion_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM promotions WHERE status = 'active'")
            .fetch_one(pool)
            .await
    }

    /// Count promotions with status `scheduled`.
    pub async fn scheduled_promotion_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM promotions WHERE status = 'scheduled'")
            .fetch_one(pool)
            .await
    }

    /// Count unacknowledged alerts partitioned by severity.
    pub async fn alert_counts(pool: &PgPool) -> Result<AlertCounts, sqlx::Error> {
        let rows: Vec<(AlertSeverity, i64)> = sqlx::query_as(
            "SELECT severity, COUNT(*) FROM alerts WHERE acknowledged = false GROUP BY severity",
        )
        .fetch_all(pool)
        .await?;

        let mut counts = AlertCounts::default();
        for (severity, count) in rows {
            counts.total += count;
            match severity {
                AlertSeverity::Critical => counts.critical = count,
                AlertSeverity::Warning => counts.warning = count,
                AlertSeverity::Info => {}
            }
        }
        Ok(counts)
    }
}

//! Repository for the `calendar_events` table.

use promotor_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::calendar_event::{CalendarEvent, CreateCalendarEvent};
use crate::models::dashboard::CalendarEntryRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, promotion_id, date, event_type, title, description, created_at, updated_at";

/// Provides CRUD operations for calendar events.
pub struct CalendarEventRepo;

impl CalendarEventRepo {
    /// Insert a new calendar event, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateCalendarEvent,
    ) -> Result<CalendarEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO calendar_events (promotion_id, date, event_type, title, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(input.promotion_id)
            .bind(input.date)
            .bind(input.event_type)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(executor)
            .await
    }

    /// Find a calendar event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CalendarEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM calendar_events WHERE id = $1");
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every event joined with its promotion's current status, ordered
    /// by date.
    ///
    /// Standalone events report a null status.
    pub async fn list_with_promotion_status(
        pool: &PgPool,
    ) -> Result<Vec<CalendarEntryRow>, sqlx::Error> {
        sqlx::query_as::<_, CalendarEntryRow>(
            "SELECT e.id, e.promotion_id, e.date, e.event_type, e.title, e.description,
                    p.status AS promotion_status
             FROM calendar_events e
             LEFT JOIN promotions p ON p.id = e.promotion_id
             ORDER BY e.date, e.id",
        )
        .fetch_all(pool)
        .await
    }

    /// List the events owned by a promotion, ordered by date.
    pub async fn list_for_promotion(
        pool: &PgPool,
        promotion_id: DbId,
    ) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calendar_events WHERE promotion_id = $1 ORDER BY date, id"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(promotion_id)
            .fetch_all(pool)
            .await
    }
}

//! Calendar event entity model and DTOs.

use chrono::NaiveDate;
use promotor_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "event_type", rename_all = "snake_case")]
pub enum EventType {
    PromotionStart,
    PromotionEnd,
    Deadline,
    Event,
    Milestone,
}

impl EventType {
    /// Display classification used by the calendar view.
    pub fn display_type(self) -> &'static str {
        match self {
            EventType::PromotionStart | EventType::PromotionEnd => "promotion",
            EventType::Deadline => "deadline",
            EventType::Event | EventType::Milestone => "event",
        }
    }
}

/// A row from the `calendar_events` table.
///
/// `promotion_id` is nullable; standalone events (deadlines, meetings) carry
/// no promotion link.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CalendarEvent {
    pub id: DbId,
    pub promotion_id: Option<DbId>,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a calendar event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCalendarEvent {
    pub promotion_id: Option<DbId>,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub title: String,
    pub description: Option<String>,
}

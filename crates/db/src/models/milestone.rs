//! Milestone entity model and DTOs.

use chrono::NaiveDate;
use promotor_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Progress state of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "milestone_status", rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Complete,
    Overdue,
}

/// Priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "priority", rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A row from the `milestones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    pub promotion_id: DbId,
    pub name: String,
    pub due_date: NaiveDate,
    pub status: MilestoneStatus,
    pub priority: Priority,
    /// Identifiers of milestones this one depends on.
    pub dependencies: Option<Vec<DbId>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a milestone.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMilestone {
    pub promotion_id: DbId,
    pub name: String,
    pub due_date: NaiveDate,
    pub status: MilestoneStatus,
    pub priority: Priority,
    pub dependencies: Option<Vec<DbId>>,
}

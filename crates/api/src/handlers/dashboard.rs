//! Handlers for the `/dashboard` resource.
//!
//! Every endpoint is a read over the current persisted state except
//! [`acknowledge_alert`], the single mutation. Response shapes are fixed;
//! all listings use deterministic orderings so identical data produces
//! identical payloads.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use promotor_core::channels::{channel_registry, ChannelInfo, ALL_CHANNELS};
use promotor_core::error::CoreError;
use promotor_core::stock::days_of_stock;
use promotor_core::types::{parse_id, DbId, Timestamp};
use promotor_db::models::alert::{Alert, AlertSeverity, AlertType};
use promotor_db::models::budget::Budget;
use promotor_db::models::calendar_event::{CalendarEvent, EventType};
use promotor_db::models::dashboard::{InventorySummary, PromotionWithBudget};
use promotor_db::models::inventory::InventoryStatus;
use promotor_db::models::milestone::{Milestone, MilestoneStatus, Priority};
use promotor_db::models::promotion::{PromotionStatus, PromotionType};
use promotor_db::repositories::{
    AlertRepo, BudgetRepo, CalendarEventRepo, DashboardRepo, InventoryRepo, MilestoneRepo,
    PromotionRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub timestamp: Timestamp,
    pub metrics: Metrics,
}

#[derive(Debug, Serialize)]
pub struct Metrics {
    pub total_sales: TotalSales,
    pub active_promotions: ActivePromotions,
    pub pending_alerts: PendingAlerts,
    /// Static placeholder block until channel integrations report real
    /// sync state.
    pub channel_health: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct TotalSales {
    pub value: i64,
    pub change: f64,
    pub period: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ActivePromotions {
    /// Active plus scheduled promotion count.
    pub value: i64,
    pub by_channel: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct PendingAlerts {
    pub value: i64,
    pub by_severity: SeverityBreakdown,
}

#[derive(Debug, Serialize)]
pub struct SeverityBreakdown {
    pub critical: i64,
    pub warning: i64,
}

/// GET /api/v1/dashboard/metrics
///
/// Headline counts for the dashboard landing page.
pub async fn metrics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let active = DashboardRepo::active_promotion_count(&state.pool).await?;
    let scheduled = DashboardRepo::scheduled_promotion_count(&state.pool).await?;
    let alert_counts = DashboardRepo::alert_counts(&state.pool).await?;

    let zeroed_by_channel: serde_json::Map<String, serde_json::Value> = ALL_CHANNELS
        .iter()
        .map(|code| (code.to_string(), json!(0)))
        .collect();
    let channel_health: serde_json::Map<String, serde_json::Value> = ALL_CHANNELS
        .iter()
        .map(|code| {
            (
                code.to_string(),
                json!({ "status": "online", "sync_status": "current" }),
            )
        })
        .collect();

    Ok(Json(MetricsResponse {
        timestamp: Utc::now(),
        metrics: Metrics {
            total_sales: TotalSales {
                value: 0,
                change: 0.0,
                period: "7d",
            },
            active_promotions: ActivePromotions {
                value: active + scheduled,
                by_channel: serde_json::Value::Object(zeroed_by_channel),
            },
            pending_alerts: PendingAlerts {
                value: alert_counts.total,
                by_severity: SeverityBreakdown {
                    critical: alert_counts.critical,
                    warning: alert_counts.warning,
                },
            },
            channel_health: serde_json::Value::Object(channel_health),
        },
    }))
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ChannelsResponse {
    pub timestamp: Timestamp,
    pub channels: Vec<ChannelInfo>,
}

/// GET /api/v1/dashboard/channels
///
/// The fixed channel registry; static configuration, not a query.
pub async fn channels() -> Json<ChannelsResponse> {
    Json(ChannelsResponse {
        timestamp: Utc::now(),
        channels: channel_registry(),
    })
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub timestamp: Timestamp,
    pub total: usize,
    pub alerts: Vec<AlertItem>,
}

#[derive(Debug, Serialize)]
pub struct AlertItem {
    pub id: DbId,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub channel: Option<String>,
    pub acknowledged: bool,
    pub created_at: Timestamp,
}

impl From<Alert> for AlertItem {
    fn from(alert: Alert) -> Self {
        Self {
            id: alert.id,
            alert_type: alert.alert_type,
            severity: alert.severity,
            title: alert.title,
            message: alert.message,
            channel: alert.channel,
            acknowledged: alert.acknowledged,
            created_at: alert.created_at,
        }
    }
}

/// GET /api/v1/dashboard/alerts
///
/// Unacknowledged alerts, most severe first, newest first within a severity.
pub async fn alerts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let alerts = AlertRepo::list_unacknowledged(&state.pool).await?;

    Ok(Json(AlertsResponse {
        timestamp: Utc::now(),
        total: alerts.len(),
        alerts: alerts.into_iter().map(AlertItem::from).collect(),
    }))
}

#[derive(Debug, Serialize)]
pub struct AcknowledgeResponse {
    pub alert_id: DbId,
    pub acknowledged: bool,
    pub acknowledged_at: Timestamp,
}

/// POST /api/v1/dashboard/alerts/{id}/acknowledge
///
/// Marks the alert acknowledged. Re-acknowledging an already acknowledged
/// alert succeeds; acknowledgment is terminal either way.
pub async fn acknowledge_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let alert_id = parse_id("Alert", &id)?;

    let acknowledged_at = AlertRepo::acknowledge(&state.pool, alert_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Alert",
            id: alert_id,
        }))?;

    Ok(Json(AcknowledgeResponse {
        alert_id,
        acknowledged: true,
        acknowledged_at,
    }))
}

// ---------------------------------------------------------------------------
// Promotions
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PromotionsResponse {
    pub timestamp: Timestamp,
    pub active: Vec<PromotionWithBudget>,
    pub upcoming: Vec<PromotionWithBudget>,
}

/// GET /api/v1/dashboard/promotions
///
/// Active promotions plus upcoming ones (scheduled or draft, starting today
/// or later), each carrying its summed budget.
pub async fn promotions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let today = Utc::now().date_naive();

    let active = PromotionRepo::list_active(&state.pool).await?;
    let upcoming = PromotionRepo::list_upcoming(&state.pool, today).await?;

    Ok(Json(PromotionsResponse {
        timestamp: Utc::now(),
        active,
        upcoming,
    }))
}

#[derive(Debug, Serialize)]
pub struct PromotionDetailResponse {
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
    pub milestones: Vec<MilestoneItem>,
    pub budgets: Vec<BudgetItem>,
    pub events: Vec<EventItem>,
}

#[derive(Debug, Serialize)]
pub struct MilestoneItem {
    pub id: DbId,
    pub name: String,
    pub due_date: NaiveDate,
    pub status: MilestoneStatus,
    pub priority: Priority,
}

impl From<Milestone> for MilestoneItem {
    fn from(m: Milestone) -> Self {
        Self {
            id: m.id,
            name: m.name,
            due_date: m.due_date,
            status: m.status,
            priority: m.priority,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BudgetItem {
    pub id: DbId,
    pub channel: String,
    pub total_amount: i64,
    pub advertising: i64,
    pub discounts: i64,
    pub influencer: i64,
    pub creative: i64,
}

impl From<Budget> for BudgetItem {
    fn from(b: Budget) -> Self {
        Self {
            id: b.id,
            channel: b.channel,
            total_amount: b.total_amount,
            advertising: b.advertising,
            discounts: b.discounts,
            influencer: b.influencer,
            creative: b.creative,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventItem {
    pub id: DbId,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub title: String,
}

impl From<CalendarEvent> for EventItem {
    fn from(e: CalendarEvent) -> Self {
        Self {
            id: e.id,
            date: e.date,
            event_type: e.event_type,
            title: e.title,
        }
    }
}

/// GET /api/v1/dashboard/promotions/{id}
///
/// The promotion plus all of its milestones, budgets, and calendar events.
pub async fn promotion_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let promotion_id = parse_id("Promotion", &id)?;

    let promotion = PromotionRepo::find_by_id(&state.pool, promotion_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Promotion",
            id: promotion_id,
        }))?;

    let milestones = MilestoneRepo::list_for_promotion(&state.pool, promotion_id).await?;
    let budgets = BudgetRepo::list_for_promotion(&state.pool, promotion_id).await?;
    let events = CalendarEventRepo::list_for_promotion(&state.pool, promotion_id).await?;

    Ok(Json(PromotionDetailResponse {
        id: promotion.id,
        name: promotion.name,
        description: promotion.description,
        status: promotion.status,
        promotion_type: promotion.promotion_type,
        channels: promotion.channels,
        start_date: promotion.start_date,
        end_date: promotion.end_date,
        discount_rate: promotion.discount_rate,
        gmv_target: promotion.gmv_target,
        gmv_actual: promotion.gmv_actual,
        milestones: milestones.into_iter().map(MilestoneItem::from).collect(),
        budgets: budgets.into_iter().map(BudgetItem::from).collect(),
        events: events.into_iter().map(EventItem::from).collect(),
    }))
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CalendarParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub timestamp: Timestamp,
    pub view: &'static str,
    /// The requested (or current) month as `YYYY-MM`.
    pub current_month: String,
    pub events: Vec<CalendarEntry>,
}

#[derive(Debug, Serialize)]
pub struct CalendarEntry {
    pub id: DbId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub display_type: &'static str,
    pub event_type: EventType,
    pub title: String,
    pub description: Option<String>,
    /// The linked promotion's current status; null for standalone events.
    pub status: Option<PromotionStatus>,
    pub promotion_id: Option<DbId>,
}

/// GET /api/v1/dashboard/calendar?year=&month=
///
/// The year/month parameters only pick the `current_month` label; every
/// stored event is returned regardless of month and callers filter
/// client-side.
pub async fn calendar(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> AppResult<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let target_year = params.year.unwrap_or_else(|| today.year());
    let target_month = params.month.unwrap_or_else(|| today.month());

    let entries = CalendarEventRepo::list_with_promotion_status(&state.pool).await?;

    let events = entries
        .into_iter()
        .map(|row| CalendarEntry {
            id: row.id,
            date: row.date,
            display_type: row.event_type.display_type(),
            event_type: row.event_type,
            title: row.title,
            description: row.description,
            status: row.promotion_status,
            promotion_id: row.promotion_id,
        })
        .collect();

    Ok(Json(CalendarResponse {
        timestamp: Utc::now(),
        view: "month",
        current_month: format!("{target_year:04}-{target_month:02}"),
        events,
    }))
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub timestamp: Timestamp,
    pub summary: InventorySummary,
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Serialize)]
pub struct InventoryItem {
    pub id: DbId,
    pub product_id: DbId,
    pub product_name: String,
    pub product_sku: Option<String>,
    pub channel: String,
    pub current_stock: i32,
    pub daily_sales_avg: i32,
    /// Whole days of coverage; null when the channel has no sales.
    pub days_of_stock: Option<i32>,
    pub status: InventoryStatus,
}

/// GET /api/v1/dashboard/inventory
///
/// Every inventory row with its product, plus a per-status summary.
pub async fn inventory(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = InventoryRepo::status_summary(&state.pool).await?;
    let rows = InventoryRepo::list_with_product(&state.pool).await?;

    let items = rows
        .into_iter()
        .map(|row| InventoryItem {
            id: row.id,
            product_id: row.product_id,
            product_name: row.product_name,
            product_sku: row.product_sku,
            channel: row.channel,
            current_stock: row.current_stock,
            daily_sales_avg: row.daily_sales_avg,
            days_of_stock: days_of_stock(row.current_stock, row.daily_sales_avg),
            status: row.status,
        })
        .collect();

    Ok(Json(InventoryResponse {
        timestamp: Utc::now(),
        summary,
        items,
    }))
}

//! HTTP-level integration tests for the dashboard endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use promotor_db::models::alert::{AlertSeverity, AlertType, CreateAlert};
use promotor_db::models::budget::CreateBudget;
use promotor_db::models::calendar_event::{CreateCalendarEvent, EventType};
use promotor_db::models::inventory::{CreateInventory, InventoryStatus};
use promotor_db::models::milestone::{CreateMilestone, MilestoneStatus, Priority};
use promotor_db::models::product::CreateProduct;
use promotor_db::models::promotion::{CreatePromotion, PromotionStatus, PromotionType};
use promotor_db::repositories::{
    AlertRepo, BudgetRepo, CalendarEventRepo, InventoryRepo, MilestoneRepo, ProductRepo,
    PromotionRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn new_promotion(name: &str, status: PromotionStatus, start: NaiveDate) -> CreatePromotion {
    CreatePromotion {
        name: name.to_string(),
        description: Some("seasonal push".to_string()),
        status,
        promotion_type: PromotionType::Seasonal,
        channels: vec!["kakao".to_string(), "naver".to_string()],
        start_date: start,
        end_date: start + chrono::Days::new(14),
        discount_rate: Some("15%".to_string()),
        gmv_target: Some(150_000_000),
        gmv_actual: None,
    }
}

fn new_alert(title: &str, severity: AlertSeverity) -> CreateAlert {
    CreateAlert {
        alert_type: AlertType::Inventory,
        severity,
        title: title.to_string(),
        message: "stock running low".to_string(),
        channel: Some("coupang".to_string()),
    }
}

fn new_budget(promotion_id: Uuid, channel: &str, total_amount: i64) -> CreateBudget {
    CreateBudget {
        promotion_id,
        channel: channel.to_string(),
        total_amount,
        advertising: total_amount / 2,
        discounts: total_amount / 4,
        influencer: 0,
        creative: 0,
    }
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_metrics_counts_promotions_and_alerts(pool: PgPool) {
    PromotionRepo::create(
        &pool,
        &new_promotion("running", PromotionStatus::Active, date(2026, 1, 10)),
    )
    .await
    .unwrap();
    PromotionRepo::create(
        &pool,
        &new_promotion("queued", PromotionStatus::Scheduled, date(2026, 2, 1)),
    )
    .await
    .unwrap();
    AlertRepo::create(&pool, &new_alert("crit", AlertSeverity::Critical))
        .await
        .unwrap();
    AlertRepo::create(&pool, &new_alert("warn", AlertSeverity::Warning))
        .await
        .unwrap();
    AlertRepo::create(&pool, &new_alert("fyi", AlertSeverity::Info))
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/dashboard/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let metrics = &json["metrics"];
    // Active plus scheduled.
    assert_eq!(metrics["active_promotions"]["value"], 2);
    assert_eq!(metrics["pending_alerts"]["value"], 3);
    assert_eq!(metrics["pending_alerts"]["by_severity"]["critical"], 1);
    assert_eq!(metrics["pending_alerts"]["by_severity"]["warning"], 1);
    assert_eq!(metrics["total_sales"]["value"], 0);
    assert_eq!(metrics["channel_health"]["oliveyoung"]["status"], "online");
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_channels_overview_is_static(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/dashboard/channels").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let channels = json["channels"].as_array().unwrap();
    let codes: Vec<&str> = channels
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["oliveyoung", "coupang", "naver", "kakao"]);
    assert_eq!(channels[1]["metrics"]["rocket_status"], "healthy");
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_alerts_listing_orders_by_severity(pool: PgPool) {
    AlertRepo::create(&pool, &new_alert("warn", AlertSeverity::Warning))
        .await
        .unwrap();
    AlertRepo::create(&pool, &new_alert("crit", AlertSeverity::Critical))
        .await
        .unwrap();
    AlertRepo::create(&pool, &new_alert("fyi", AlertSeverity::Info))
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/dashboard/alerts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["total"], 3);
    let severities: Vec<&str> = json["alerts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["severity"].as_str().unwrap())
        .collect();
    assert_eq!(severities, ["critical", "warning", "info"]);
    assert_eq!(json["alerts"][0]["type"], "inventory");
    assert_eq!(json["alerts"][0]["channel"], "coupang");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acknowledge_alert_twice_is_idempotent(pool: PgPool) {
    let alert = AlertRepo::create(&pool, &new_alert("ack me", AlertSeverity::Critical))
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/dashboard/alerts/{}/acknowledge", alert.id);
    let response = common::post(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["acknowledged"], true);
    assert_eq!(json["alert_id"], alert.id.to_string());
    assert!(json["acknowledged_at"].is_string());

    // Re-acknowledging succeeds.
    let app = common::build_test_app(pool.clone());
    let response = common::post(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The alert no longer appears in the active listing.
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/dashboard/alerts").await;
    let json = common::body_json(response).await;
    assert_eq!(json["total"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acknowledge_with_malformed_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post(app, "/api/v1/dashboard/alerts/not-a-uuid/acknowledge").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = common::body_json(response).await;
    assert_eq!(json["code"], "INVALID_ARGUMENT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acknowledge_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/dashboard/alerts/{}/acknowledge", Uuid::new_v4());
    let response = common::post(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = common::body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Promotions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_promotions_listing_includes_total_budget(pool: PgPool) {
    let promotion = PromotionRepo::create(
        &pool,
        &new_promotion("lunar gift set", PromotionStatus::Active, date(2026, 2, 1)),
    )
    .await
    .unwrap();
    BudgetRepo::create(&pool, &new_budget(promotion.id, "kakao", 30_000_000))
        .await
        .unwrap();
    BudgetRepo::create(&pool, &new_budget(promotion.id, "naver", 25_000_000))
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/dashboard/promotions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let active = json["active"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["name"], "lunar gift set");
    assert_eq!(active[0]["type"], "seasonal");
    assert_eq!(active[0]["total_budget"], 55_000_000);
    assert_eq!(active[0]["start_date"], "2026-02-01");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_promotion_detail_includes_children(pool: PgPool) {
    let promotion = PromotionRepo::create(
        &pool,
        &new_promotion("lunar gift set", PromotionStatus::Scheduled, date(2026, 2, 1)),
    )
    .await
    .unwrap();
    MilestoneRepo::create(
        &pool,
        &CreateMilestone {
            promotion_id: promotion.id,
            name: "stock arrival".to_string(),
            due_date: date(2026, 1, 28),
            status: MilestoneStatus::InProgress,
            priority: Priority::High,
            dependencies: None,
        },
    )
    .await
    .unwrap();
    BudgetRepo::create(&pool, &new_budget(promotion.id, "kakao", 30_000_000))
        .await
        .unwrap();
    CalendarEventRepo::create(
        &pool,
        &CreateCalendarEvent {
            promotion_id: Some(promotion.id),
            date: date(2026, 2, 1),
            event_type: EventType::PromotionStart,
            title: "launch".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = common::get(app, &format!("/api/v1/dashboard/promotions/{}", promotion.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["id"], promotion.id.to_string());
    assert_eq!(json["status"], "scheduled");
    assert_eq!(json["type"], "seasonal");
    assert_eq!(json["channels"], serde_json::json!(["kakao", "naver"]));

    let milestones = json["milestones"].as_array().unwrap();
    assert_eq!(milestones.len(), 1);
    assert_eq!(milestones[0]["name"], "stock arrival");
    assert_eq!(milestones[0]["status"], "in_progress");
    assert_eq!(milestones[0]["priority"], "high");

    let budgets = json["budgets"].as_array().unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0]["channel"], "kakao");
    assert_eq!(budgets[0]["total_amount"], 30_000_000);

    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event_type"], "promotion_start");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_promotion_detail_invalid_id_is_400_not_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/api/v1/dashboard/promotions/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "INVALID_ARGUMENT");

    let app = common::build_test_app(pool);
    let response =
        common::get(app, &format!("/api/v1/dashboard/promotions/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_calendar_returns_events_outside_requested_month(pool: PgPool) {
    let promotion = PromotionRepo::create(
        &pool,
        &new_promotion("spring", PromotionStatus::Draft, date(2026, 3, 1)),
    )
    .await
    .unwrap();
    CalendarEventRepo::create(
        &pool,
        &CreateCalendarEvent {
            promotion_id: Some(promotion.id),
            date: date(2026, 3, 1),
            event_type: EventType::PromotionStart,
            title: "march launch".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    CalendarEventRepo::create(
        &pool,
        &CreateCalendarEvent {
            promotion_id: None,
            date: date(2026, 2, 10),
            event_type: EventType::Deadline,
            title: "february deadline".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/dashboard/calendar?year=2026&month=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["view"], "month");
    assert_eq!(json["current_month"], "2026-02");

    // The month parameter only labels the view: the March event is still
    // returned alongside the February one.
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0]["title"], "february deadline");
    assert_eq!(events[0]["type"], "deadline");
    assert_eq!(events[0]["status"], serde_json::Value::Null);

    assert_eq!(events[1]["title"], "march launch");
    assert_eq!(events[1]["type"], "promotion");
    assert_eq!(events[1]["event_type"], "promotion_start");
    assert_eq!(events[1]["status"], "draft");
    assert_eq!(events[1]["promotion_id"], promotion.id.to_string());
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inventory_reports_days_of_stock(pool: PgPool) {
    let product = ProductRepo::create(
        &pool,
        &CreateProduct {
            name: "Hyaluronic Toner".to_string(),
            category: "skincare".to_string(),
            brand: "glowlab".to_string(),
            sku: Some("GL-HT-150".to_string()),
            price: 28000,
            map_price: Some(25000),
        },
    )
    .await
    .unwrap();
    InventoryRepo::create(
        &pool,
        &CreateInventory {
            product_id: product.id,
            channel: "coupang".to_string(),
            current_stock: 45,
            daily_sales_avg: 12,
            status: InventoryStatus::Critical,
        },
    )
    .await
    .unwrap();
    InventoryRepo::create(
        &pool,
        &CreateInventory {
            product_id: product.id,
            channel: "kakao".to_string(),
            current_stock: 100,
            daily_sales_avg: 0,
            status: InventoryStatus::Healthy,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/dashboard/inventory").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["summary"]["critical"], 1);
    assert_eq!(json["summary"]["healthy"], 1);
    assert_eq!(json["summary"]["low_stock"], 0);
    assert_eq!(json["summary"]["out_of_stock"], 0);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    // Ordered by product name then channel: coupang before kakao.
    assert_eq!(items[0]["channel"], "coupang");
    // Integer division, truncated.
    assert_eq!(items[0]["days_of_stock"], 3);
    assert_eq!(items[0]["product_name"], "Hyaluronic Toner");
    assert_eq!(items[0]["product_sku"], "GL-HT-150");

    // A zero daily average yields an explicit null, never an error.
    assert_eq!(items[1]["channel"], "kakao");
    assert_eq!(items[1]["days_of_stock"], serde_json::Value::Null);
}

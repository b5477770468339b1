//! Deterministic sample data for the K-beauty promotion dashboard.
//!
//! Inserts run in dependency order (products before inventories, promotions
//! before their owned children) inside a single transaction, so a failed seed
//! leaves no partial graph behind.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::{Postgres, Transaction};

use promotor_core::types::DbId;

use crate::models::alert::{AlertSeverity, AlertType, CreateAlert};
use crate::models::budget::CreateBudget;
use crate::models::calendar_event::{CreateCalendarEvent, EventType};
use crate::models::inventory::{CreateInventory, InventoryStatus};
use crate::models::milestone::{CreateMilestone, MilestoneStatus, Priority};
use crate::models::product::CreateProduct;
use crate::models::promotion::{CreatePromotion, PromotionStatus, PromotionType};
use crate::repositories::{
    AlertRepo, BudgetRepo, CalendarEventRepo, InventoryRepo, MilestoneRepo, ProductRepo,
    PromotionRepo,
};
use crate::DbPool;

/// Row counts inserted by [`run`].
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub products: usize,
    pub inventories: usize,
    pub promotions: usize,
    pub calendar_events: usize,
    pub milestones: usize,
    pub budgets: usize,
    pub alerts: usize,
}

/// IDs of the seeded promotions, for linking their children.
struct SeededPromotions {
    lunar_gift_set: DbId,
    spring_hydration: DbId,
    oliveyoung_festa: DbId,
}

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date literal")
}

/// Insert the full sample graph, returning the per-table counts.
pub async fn run(pool: &DbPool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    let products = seed_products(&mut tx, &mut summary).await?;
    seed_inventories(&mut tx, &mut summary, &products).await?;
    let promotions = seed_promotions(&mut tx, &mut summary).await?;
    seed_calendar_events(&mut tx, &mut summary, &promotions).await?;
    seed_milestones(&mut tx, &mut summary, &promotions).await?;
    seed_budgets(&mut tx, &mut summary, &promotions).await?;
    seed_alerts(&mut tx, &mut summary).await?;

    tx.commit().await?;
    tracing::info!(
        products = summary.products,
        inventories = summary.inventories,
        promotions = summary.promotions,
        calendar_events = summary.calendar_events,
        milestones = summary.milestones,
        budgets = summary.budgets,
        alerts = summary.alerts,
        "Seeded sample data"
    );
    Ok(summary)
}

/// Remove all rows from every table.
///
/// One statement, so the truncation is atomic and the cascade rules keep the
/// graph consistent.
pub async fn clear(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "TRUNCATE products, inventories, promotions, calendar_events, milestones, budgets, alerts",
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn seed_products(
    tx: &mut Transaction<'_, Postgres>,
    summary: &mut SeedSummary,
) -> Result<HashMap<&'static str, DbId>, sqlx::Error> {
    let products_data: [(&str, &str, &str, &str, i32, i32); 5] = [
        ("히알루론산 토너", "스킨케어", "글로우랩", "GL-HT-150", 28000, 25000),
        ("레티놀 나이트크림", "스킨케어", "글로우랩", "GL-RN-050", 45000, 40000),
        ("비타민C 세럼", "스킨케어", "글로우랩", "GL-VC-030", 38000, 34000),
        ("선크림 SPF50+", "선케어", "글로우랩", "GL-SC-050", 25000, 22000),
        ("클렌징밤", "클렌징", "글로우랩", "GL-CB-100", 32000, 28000),
    ];

    let mut products = HashMap::new();
    for (name, category, brand, sku, price, map_price) in products_data {
        let product = ProductRepo::create(
            &mut **tx,
            &CreateProduct {
                name: name.to_string(),
                category: category.to_string(),
                brand: brand.to_string(),
                sku: Some(sku.to_string()),
                price,
                map_price: Some(map_price),
            },
        )
        .await?;
        products.insert(sku, product.id);
        summary.products += 1;
    }
    Ok(products)
}

async fn seed_inventories(
    tx: &mut Transaction<'_, Postgres>,
    summary: &mut SeedSummary,
    products: &HashMap<&'static str, DbId>,
) -> Result<(), sqlx::Error> {
    use InventoryStatus::*;

    let inventory_data: [(&str, &str, i32, i32, InventoryStatus); 16] = [
        ("GL-HT-150", "oliveyoung", 500, 25, Healthy),
        ("GL-HT-150", "coupang", 300, 30, Healthy),
        ("GL-HT-150", "naver", 150, 10, Healthy),
        ("GL-HT-150", "kakao", 80, 5, LowStock),
        ("GL-RN-050", "oliveyoung", 200, 15, Healthy),
        ("GL-RN-050", "coupang", 45, 12, Critical),
        ("GL-RN-050", "naver", 100, 8, Healthy),
        ("GL-VC-030", "oliveyoung", 350, 20, Healthy),
        ("GL-VC-030", "coupang", 0, 18, OutOfStock),
        ("GL-VC-030", "naver", 120, 7, Healthy),
        ("GL-SC-050", "oliveyoung", 600, 40, Healthy),
        ("GL-SC-050", "coupang", 400, 35, Healthy),
        ("GL-SC-050", "naver", 200, 15, Healthy),
        ("GL-SC-050", "kakao", 100, 8, Healthy),
        ("GL-CB-100", "oliveyoung", 250, 12, Healthy),
        ("GL-CB-100", "coupang", 35, 10, Critical),
    ];

    for (sku, channel, current_stock, daily_sales_avg, status) in inventory_data {
        let product_id = products[sku];
        InventoryRepo::create(
            &mut **tx,
            &CreateInventory {
                product_id,
                channel: channel.to_string(),
                current_stock,
                daily_sales_avg,
                status,
            },
        )
        .await?;
        summary.inventories += 1;
    }
    Ok(())
}

async fn seed_promotions(
    tx: &mut Transaction<'_, Postgres>,
    summary: &mut SeedSummary,
) -> Result<SeededPromotions, sqlx::Error> {
    let lunar_gift_set = PromotionRepo::create(
        &mut **tx,
        &CreatePromotion {
            name: "설 선물세트 프로모션".to_string(),
            description: Some("설날 맞이 프리미엄 선물세트 할인 행사".to_string()),
            status: PromotionStatus::Scheduled,
            promotion_type: PromotionType::Seasonal,
            channels: vec!["kakao".to_string(), "naver".to_string()],
            start_date: d(2026, 2, 1),
            end_date: d(2026, 2, 15),
            discount_rate: Some("15%".to_string()),
            gmv_target: Some(150_000_000),
            gmv_actual: None,
        },
    )
    .await?
    .id;

    let spring_hydration = PromotionRepo::create(
        &mut **tx,
        &CreatePromotion {
            name: "봄맞이 수분케어 기획전".to_string(),
            description: Some("봄철 건조함 대비 수분케어 라인 기획전".to_string()),
            status: PromotionStatus::Draft,
            promotion_type: PromotionType::Seasonal,
            channels: vec!["oliveyoung".to_string(), "coupang".to_string()],
            start_date: d(2026, 3, 1),
            end_date: d(2026, 3, 15),
            discount_rate: Some("20%".to_string()),
            gmv_target: Some(200_000_000),
            gmv_actual: None,
        },
    )
    .await?
    .id;

    let oliveyoung_festa = PromotionRepo::create(
        &mut **tx,
        &CreatePromotion {
            name: "올리브영 페스타 참여".to_string(),
            description: Some("올리브영 대규모 세일 이벤트 참여".to_string()),
            status: PromotionStatus::Draft,
            promotion_type: PromotionType::ChannelExclusive,
            channels: vec!["oliveyoung".to_string()],
            start_date: d(2026, 4, 1),
            end_date: d(2026, 4, 7),
            discount_rate: Some("25%".to_string()),
            gmv_target: Some(100_000_000),
            gmv_actual: None,
        },
    )
    .await?
    .id;

    summary.promotions += 3;
    Ok(SeededPromotions {
        lunar_gift_set,
        spring_hydration,
        oliveyoung_festa,
    })
}

async fn seed_calendar_events(
    tx: &mut Transaction<'_, Postgres>,
    summary: &mut SeedSummary,
    promotions: &SeededPromotions,
) -> Result<(), sqlx::Error> {
    let events_data: [(Option<DbId>, NaiveDate, EventType, &str, Option<&str>); 9] = [
        (
            Some(promotions.lunar_gift_set),
            d(2026, 2, 1),
            EventType::PromotionStart,
            "설 선물세트 시작",
            Some("카카오, 네이버 동시 런칭"),
        ),
        (
            Some(promotions.lunar_gift_set),
            d(2026, 2, 15),
            EventType::PromotionEnd,
            "설 선물세트 종료",
            None,
        ),
        (
            Some(promotions.spring_hydration),
            d(2026, 3, 1),
            EventType::PromotionStart,
            "봄 수분케어 시작",
            Some("올리브영, 쿠팡 동시 런칭"),
        ),
        (
            Some(promotions.spring_hydration),
            d(2026, 3, 15),
            EventType::PromotionEnd,
            "봄 수분케어 종료",
            None,
        ),
        (
            Some(promotions.oliveyoung_festa),
            d(2026, 4, 1),
            EventType::PromotionStart,
            "올리브영 페스타 시작",
            Some("25% 할인 행사"),
        ),
        (
            Some(promotions.oliveyoung_festa),
            d(2026, 4, 7),
            EventType::PromotionEnd,
            "올리브영 페스타 종료",
            None,
        ),
        (
            None,
            d(2026, 2, 10),
            EventType::Deadline,
            "Q2 기획 제출 마감",
            Some("2분기 프로모션 기획안 제출"),
        ),
        (
            None,
            d(2026, 3, 20),
            EventType::Deadline,
            "올리브영 페스타 신청 마감",
            Some("올리브영 페스타 참여 신청 마감일"),
        ),
        (
            None,
            d(2026, 2, 25),
            EventType::Event,
            "인플루언서 미팅",
            Some("봄 시즌 협업 인플루언서 선정 미팅"),
        ),
    ];

    for (promotion_id, date, event_type, title, description) in events_data {
        CalendarEventRepo::create(
            &mut **tx,
            &CreateCalendarEvent {
                promotion_id,
                date,
                event_type,
                title: title.to_string(),
                description: description.map(str::to_string),
            },
        )
        .await?;
        summary.calendar_events += 1;
    }
    Ok(())
}

async fn seed_milestones(
    tx: &mut Transaction<'_, Postgres>,
    summary: &mut SeedSummary,
    promotions: &SeededPromotions,
) -> Result<(), sqlx::Error> {
    let milestones_data: [(DbId, &str, NaiveDate, MilestoneStatus, Priority); 9] = [
        (
            promotions.lunar_gift_set,
            "상품 기획 완료",
            d(2026, 1, 15),
            MilestoneStatus::Complete,
            Priority::High,
        ),
        (
            promotions.lunar_gift_set,
            "패키지 디자인 확정",
            d(2026, 1, 20),
            MilestoneStatus::Complete,
            Priority::High,
        ),
        (
            promotions.lunar_gift_set,
            "재고 입고 완료",
            d(2026, 1, 28),
            MilestoneStatus::InProgress,
            Priority::High,
        ),
        (
            promotions.lunar_gift_set,
            "채널 상품 등록",
            d(2026, 1, 30),
            MilestoneStatus::Pending,
            Priority::Medium,
        ),
        (
            promotions.spring_hydration,
            "기획안 작성",
            d(2026, 2, 1),
            MilestoneStatus::Pending,
            Priority::High,
        ),
        (
            promotions.spring_hydration,
            "예산 승인",
            d(2026, 2, 10),
            MilestoneStatus::Pending,
            Priority::High,
        ),
        (
            promotions.spring_hydration,
            "크리에이티브 제작",
            d(2026, 2, 20),
            MilestoneStatus::Pending,
            Priority::Medium,
        ),
        (
            promotions.oliveyoung_festa,
            "참여 신청서 제출",
            d(2026, 3, 20),
            MilestoneStatus::Pending,
            Priority::High,
        ),
        (
            promotions.oliveyoung_festa,
            "할인 상품 선정",
            d(2026, 3, 25),
            MilestoneStatus::Pending,
            Priority::Medium,
        ),
    ];

    for (promotion_id, name, due_date, status, priority) in milestones_data {
        MilestoneRepo::create(
            &mut **tx,
            &CreateMilestone {
                promotion_id,
                name: name.to_string(),
                due_date,
                status,
                priority,
                dependencies: None,
            },
        )
        .await?;
        summary.milestones += 1;
    }
    Ok(())
}

async fn seed_budgets(
    tx: &mut Transaction<'_, Postgres>,
    summary: &mut SeedSummary,
    promotions: &SeededPromotions,
) -> Result<(), sqlx::Error> {
    let budgets_data: [(DbId, &str, i64, i64, i64, i64, i64); 5] = [
        (
            promotions.lunar_gift_set,
            "kakao",
            30_000_000,
            15_000_000,
            10_000_000,
            3_000_000,
            2_000_000,
        ),
        (
            promotions.lunar_gift_set,
            "naver",
            25_000_000,
            12_000_000,
            8_000_000,
            3_000_000,
            2_000_000,
        ),
        (
            promotions.spring_hydration,
            "oliveyoung",
            50_000_000,
            20_000_000,
            20_000_000,
            5_000_000,
            5_000_000,
        ),
        (
            promotions.spring_hydration,
            "coupang",
            40_000_000,
            18_000_000,
            15_000_000,
            4_000_000,
            3_000_000,
        ),
        (
            promotions.oliveyoung_festa,
            "oliveyoung",
            35_000_000,
            10_000_000,
            20_000_000,
            3_000_000,
            2_000_000,
        ),
    ];

    for (promotion_id, channel, total_amount, advertising, discounts, influencer, creative) in
        budgets_data
    {
        BudgetRepo::create(
            &mut **tx,
            &CreateBudget {
                promotion_id,
                channel: channel.to_string(),
                total_amount,
                advertising,
                discounts,
                influencer,
                creative,
            },
        )
        .await?;
        summary.budgets += 1;
    }
    Ok(())
}

async fn seed_alerts(
    tx: &mut Transaction<'_, Postgres>,
    summary: &mut SeedSummary,
) -> Result<(), sqlx::Error> {
    let alerts_data: [(AlertType, AlertSeverity, &str, &str, Option<&str>); 5] = [
        (
            AlertType::Inventory,
            AlertSeverity::Critical,
            "비타민C 세럼 품절",
            "쿠팡 채널에서 비타민C 세럼(GL-VC-030)이 품절되었습니다. 긴급 재고 보충이 필요합니다.",
            Some("coupang"),
        ),
        (
            AlertType::Inventory,
            AlertSeverity::Critical,
            "레티놀 크림 재고 부족",
            "쿠팡 채널의 레티놀 나이트크림 재고가 3일 분량만 남았습니다.",
            Some("coupang"),
        ),
        (
            AlertType::Inventory,
            AlertSeverity::Warning,
            "클렌징밤 재고 주의",
            "쿠팡 채널의 클렌징밤 재고가 낮습니다. 재고 보충을 검토해주세요.",
            Some("coupang"),
        ),
        (
            AlertType::Inventory,
            AlertSeverity::Warning,
            "히알루론산 토너 재고 주의",
            "카카오 채널의 히알루론산 토너 재고가 낮습니다. 16일 분량만 남았습니다.",
            Some("kakao"),
        ),
        (
            AlertType::Promotion,
            AlertSeverity::Info,
            "설 프로모션 D-3",
            "설 선물세트 프로모션 시작까지 3일 남았습니다. 최종 점검을 진행해주세요.",
            None,
        ),
    ];

    for (alert_type, severity, title, message, channel) in alerts_data {
        AlertRepo::create(
            &mut **tx,
            &CreateAlert {
                alert_type,
                severity,
                title: title.to_string(),
                message: message.to_string(),
                channel: channel.map(str::to_string),
            },
        )
        .await?;
        summary.alerts += 1;
    }
    Ok(())
}

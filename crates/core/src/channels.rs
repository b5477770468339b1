//! Fixed registry of the sales channels tracked by the dashboard.
//!
//! These must match the channel codes stored in the `inventories.channel`,
//! `budgets.channel`, and `alerts.channel` columns and carried in
//! `promotions.channels`.

use serde::Serialize;
use serde_json::json;

/// Olive Young marketplace.
pub const CHANNEL_OLIVEYOUNG: &str = "oliveyoung";

/// Coupang marketplace (rocket delivery).
pub const CHANNEL_COUPANG: &str = "coupang";

/// Naver smart store.
pub const CHANNEL_NAVER: &str = "naver";

/// Kakao gift commerce.
pub const CHANNEL_KAKAO: &str = "kakao";

/// All channel codes in registry order.
pub const ALL_CHANNELS: [&str; 4] = [
    CHANNEL_OLIVEYOUNG,
    CHANNEL_COUPANG,
    CHANNEL_NAVER,
    CHANNEL_KAKAO,
];

/// A channel entry in the overview payload.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelInfo {
    pub name: &'static str,
    pub code: &'static str,
    pub status: &'static str,
    /// Per-channel metric block. Shapes differ per channel, so this stays
    /// loosely typed; values are placeholders until channel integrations
    /// report real figures.
    pub metrics: serde_json::Value,
}

/// Build the fixed channel overview registry.
///
/// This is static configuration, not a query.
pub fn channel_registry() -> Vec<ChannelInfo> {
    vec![
        ChannelInfo {
            name: "Oliveyoung",
            code: CHANNEL_OLIVEYOUNG,
            status: "online",
            metrics: json!({
                "gmv_7d": 0,
                "orders_7d": 0,
                "active_deals": 0,
                "ranking_position": null,
            }),
        },
        ChannelInfo {
            name: "Coupang",
            code: CHANNEL_COUPANG,
            status: "online",
            metrics: json!({
                "gmv_7d": 0,
                "orders_7d": 0,
                "active_deals": 0,
                "rocket_status": "healthy",
            }),
        },
        ChannelInfo {
            name: "Naver",
            code: CHANNEL_NAVER,
            status: "online",
            metrics: json!({
                "gmv_7d": 0,
                "orders_7d": 0,
                "store_grade": null,
                "live_scheduled": 0,
            }),
        },
        ChannelInfo {
            name: "Kakao",
            code: CHANNEL_KAKAO,
            status: "online",
            metrics: json!({
                "gmv_7d": 0,
                "orders_7d": 0,
                "gift_ranking": null,
                "channel_friends": 0,
            }),
        },
    ]
}

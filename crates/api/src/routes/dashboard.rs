//! Route definitions for the promotion dashboard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard query and alert-acknowledgment routes.
///
/// ```text
/// GET   /metrics                     -> metrics
/// GET   /channels                    -> channels
/// GET   /alerts                      -> alerts
/// POST  /alerts/{id}/acknowledge     -> acknowledge_alert
/// GET   /promotions                  -> promotions
/// GET   /promotions/{id}             -> promotion_detail
/// GET   /calendar                    -> calendar
/// GET   /inventory                   -> inventory
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(dashboard::metrics))
        .route("/channels", get(dashboard::channels))
        .route("/alerts", get(dashboard::alerts))
        .route("/alerts/{id}/acknowledge", post(dashboard::acknowledge_alert))
        .route("/promotions", get(dashboard::promotions))
        .route("/promotions/{id}", get(dashboard::promotion_detail))
        .route("/calendar", get(dashboard::calendar))
        .route("/inventory", get(dashboard::inventory))
}

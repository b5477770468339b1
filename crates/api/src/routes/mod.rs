pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /dashboard/metrics                      headline metrics
/// /dashboard/channels                     static channel overview
/// /dashboard/alerts                       unacknowledged alerts
/// /dashboard/alerts/{id}/acknowledge      acknowledge an alert (POST)
/// /dashboard/promotions                   active + upcoming promotions
/// /dashboard/promotions/{id}              promotion detail
/// /dashboard/calendar                     calendar view
/// /dashboard/inventory                    inventory status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/dashboard", dashboard::router())
}

//! Dashboard routes: aggregated statistics for the overview page.

use axum::extract::State;

use crate::errors::AppError;
use crate::handlers::Reply;
use crate::models::stats::DashboardStats;
use crate::AppState;

/// GET /api/stats/dashboard — the three dashboard counters.
pub async fn stats(State(state): State<AppState>) -> Result<Reply<DashboardStats>, AppError> {
    state.stats.get_dashboard_stats().await
}

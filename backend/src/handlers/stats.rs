//! Dashboard statistics.

use std::sync::Arc;

use crate::errors::AppError;
use crate::handlers::Reply;
use crate::models::stats::DashboardStats;
use crate::services::{HistoryService, VisitService};

#[derive(Clone)]
pub struct StatsHandler {
    history: Arc<dyn HistoryService>,
    visits: Arc<dyn VisitService>,
}

impl StatsHandler {
    pub fn new(history: Arc<dyn HistoryService>, visits: Arc<dyn VisitService>) -> Self {
        Self { history, visits }
    }

    /// Reads the three counters independently; no consistency across them.
    pub async fn get_dashboard_stats(&self) -> Result<Reply<DashboardStats>, AppError> {
        let (patients_served, appointments_today, vaccinations_today) = tokio::try_join!(
            self.history.count_patients_served(),
            self.visits.count_appointments_today(),
            self.history.count_vaccinations_today(),
        )?;

        let stats = DashboardStats {
            patients_served,
            appointments_today,
            vaccinations_today,
        };
        tracing::debug!(?stats, "Computed dashboard stats");
        Ok(Reply::ok(stats))
    }
}

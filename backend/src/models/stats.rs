//! Dashboard counters.

use serde::{Deserialize, Serialize};

/// The three headline numbers on the clinic dashboard. Serializes to a map
/// with exactly these three keys; a missing count is reported as zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    #[serde(rename = "pacientesAtendidos")]
    pub patients_served: u64,
    #[serde(rename = "citasDelDia")]
    pub appointments_today: u64,
    #[serde(rename = "vacunasAplicadas")]
    pub vaccinations_today: u64,
}

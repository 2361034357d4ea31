//! Report written after a successful solve.

use serde::{Deserialize, Serialize};
use stopover_core::SolveResponse;

/// Flat summary of a [`SolveResponse`] in the units of the input files.
///
/// When no candidate has a finite cost the report carries an empty
/// `shortest_path` and no `total_cost`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SolveReport {
    /// Start, stops in visiting order, end.
    pub shortest_path: Vec<String>,
    /// Weighted cost of the path.
    pub total_cost: Option<f64>,
    /// Summed distance in kilometres.
    pub total_distance_km: f64,
    /// Summed duration in minutes.
    pub total_duration_min: f64,
    /// Number of orderings priced.
    pub candidates_evaluated: u64,
    /// Wall-clock time spent in the solver.
    pub solving_time_seconds: f64,
}

impl From<SolveResponse> for SolveReport {
    fn from(response: SolveResponse) -> Self {
        Self {
            shortest_path: response.path,
            total_cost: Some(response.min_cost).filter(|cost| cost.is_finite()),
            total_distance_km: response.total_distance,
            total_duration_min: response.total_duration,
            candidates_evaluated: response.diagnostics.candidates_evaluated,
            solving_time_seconds: response.diagnostics.solve_time.as_secs_f64(),
        }
    }
}

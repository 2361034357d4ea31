use std::time::Duration;

use crate::{CostWeights, GraphStore, SolveError};

/// Parameters for a solve request.
///
/// The request names the fixed endpoints of the trip, the stops that must all
/// be visited between them and the weights used to rank candidate routes.
/// `required_stops` is a sequence, not a set: duplicates are kept.
///
/// # Examples
/// ```rust
/// use stopover_core::{CostWeights, SolveRequest};
///
/// let request = SolveRequest::new("Depot", "Depot", ["Bakery", "Mill"], CostWeights::distance_only());
/// assert_eq!(request.required_stops, vec!["Bakery".to_owned(), "Mill".to_owned()]);
/// assert_eq!(request.start, request.end);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Location every candidate route leaves from.
    pub start: String,
    /// Location every candidate route arrives at. May equal `start`.
    pub end: String,
    /// Locations that must all be visited, in any order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_stops: Vec<String>,
    /// Weights combining distance and duration into a cost.
    pub weights: CostWeights,
}

impl SolveRequest {
    /// Construct a request from its endpoints, stops and weights.
    #[must_use]
    pub fn new<I>(
        start: impl Into<String>,
        end: impl Into<String>,
        required_stops: I,
        weights: CostWeights,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            start: start.into(),
            end: end.into(),
            required_stops: required_stops.into_iter().map(Into::into).collect(),
            weights,
        }
    }
}

/// Diagnostics captured while solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent searching.
    pub solve_time: Duration,
    /// Number of candidate routes fully evaluated.
    pub candidates_evaluated: u64,
}

/// Response from a successful solve.
///
/// Describes the winning candidate only. When no candidate could be ranked
/// (every cost was NaN or infinite) `path` is empty and `min_cost` is
/// `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// Start, the chosen stop ordering, then end.
    pub path: Vec<String>,
    /// Weighted cost of `path`.
    pub min_cost: f64,
    /// Sum of edge distances along `path`.
    pub total_distance: f64,
    /// Sum of edge durations along `path`.
    pub total_duration: f64,
    /// Search statistics.
    #[cfg_attr(feature = "serde", serde(default))]
    pub diagnostics: Diagnostics,
}

/// Find the cheapest route through all required stops.
///
/// Implementations borrow the graph read-only for the duration of the call
/// and keep no state between calls.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request against `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EdgeNotFound`] when a candidate route needs an
    /// edge the graph lacks.
    fn solve(
        &self,
        graph: &dyn GraphStore,
        request: &SolveRequest,
    ) -> Result<SolveResponse, SolveError>;
}

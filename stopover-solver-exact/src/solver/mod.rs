//! `ExhaustiveSolver` implementation.
//!
//! Candidates are visited in lexicographic order of their stop orderings. The
//! incumbent is replaced only by a strictly cheaper route, so ties keep the
//! earliest ordering, and the first missing edge ends the whole solve.

use std::time::Instant;

use stopover_core::{
    Diagnostics, GraphStore, SolveError, SolveRequest, SolveResponse, Solver,
};

use crate::{Permutations, RouteCost, RouteEvaluator, candidate_count};

mod shard;

pub use shard::{ShardOutcome, partition_ranks};

/// Configuration for [`ExhaustiveSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExhaustiveSolverConfig {
    /// Refuse requests whose number of candidate routes exceeds this bound.
    ///
    /// `None` (the default) enumerates every request regardless of size.
    pub max_candidates: Option<u64>,
}

/// Exact solver enumerating every ordering of the required stops.
///
/// The solver holds no per-call state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    config: ExhaustiveSolverConfig,
}

/// Best candidate seen so far, with the rank it was found at.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Incumbent {
    pub(crate) rank: u64,
    pub(crate) path: Vec<String>,
    pub(crate) totals: RouteCost,
}

impl ExhaustiveSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ExhaustiveSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: ExhaustiveSolverConfig) -> Self {
        Self { config }
    }

    /// Solve `request` against any graph store without dynamic dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EdgeNotFound`] for the first missing edge in
    /// enumeration order, or [`SolveError::TooManyCandidates`] when the
    /// configured limit is exceeded.
    pub fn solve_with<G>(&self, graph: &G, request: &SolveRequest) -> Result<SolveResponse, SolveError>
    where
        G: GraphStore + ?Sized,
    {
        self.check_candidate_limit(request)?;
        let started_at = Instant::now();
        log::debug!(
            "solving {} -> {} through {} required stops",
            request.start,
            request.end,
            request.required_stops.len()
        );

        let evaluator = RouteEvaluator::new(graph, request.weights);
        let mut permutations = Permutations::new(request.required_stops.iter().cloned());
        let mut evaluated = 0_u64;
        let incumbent = scan(&evaluator, request, &mut permutations, None, &mut evaluated)?;

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            candidates_evaluated: evaluated,
        };
        log::debug!(
            "evaluated {evaluated} candidates in {:?}",
            diagnostics.solve_time
        );
        Ok(into_response(incumbent, diagnostics))
    }

    fn check_candidate_limit(&self, request: &SolveRequest) -> Result<(), SolveError> {
        let Some(limit) = self.config.max_candidates else {
            return Ok(());
        };
        let stops = request.required_stops.len();
        match candidate_count(stops) {
            Some(total) if total <= limit => Ok(()),
            _ => Err(SolveError::TooManyCandidates { stops, limit }),
        }
    }
}

impl Solver for ExhaustiveSolver {
    fn solve(
        &self,
        graph: &dyn GraphStore,
        request: &SolveRequest,
    ) -> Result<SolveResponse, SolveError> {
        self.solve_with(graph, request)
    }
}

/// Solve a single request with the default [`ExhaustiveSolver`].
///
/// Mirrors the plain call contract: graph, endpoints, stops and the two
/// weights in, the cheapest route or the first missing edge out.
///
/// # Errors
///
/// Returns [`SolveError::EdgeNotFound`] for the first missing edge in
/// enumeration order.
///
/// # Examples
///
/// ```
/// use stopover_core::{Edge, Graph};
///
/// let graph = Graph::new().with_edge("Home", "Home", Edge::new(0.0, 0.0));
/// let response = stopover_solver_exact::solve(&graph, "Home", "Home", &[], 1.0, 1.0)?;
/// assert_eq!(response.path, ["Home", "Home"]);
/// # Ok::<(), stopover_core::SolveError>(())
/// ```
pub fn solve<G>(
    graph: &G,
    start: &str,
    end: &str,
    required_stops: &[String],
    weight_distance: f64,
    weight_duration: f64,
) -> Result<SolveResponse, SolveError>
where
    G: GraphStore + ?Sized,
{
    let request = SolveRequest::new(
        start,
        end,
        required_stops.iter().cloned(),
        stopover_core::CostWeights::new(weight_distance, weight_duration),
    );
    ExhaustiveSolver::new().solve_with(graph, &request)
}

/// Evaluate candidates from the current ordering onwards.
///
/// Stops after `limit` candidates when given, or once enumeration ends. On
/// error `permutations` is left at the failing ordering so callers can read
/// its rank.
pub(crate) fn scan<G>(
    evaluator: &RouteEvaluator<'_, G>,
    request: &SolveRequest,
    permutations: &mut Permutations,
    limit: Option<u64>,
    evaluated: &mut u64,
) -> Result<Option<Incumbent>, SolveError>
where
    G: GraphStore + ?Sized,
{
    let mut incumbent: Option<Incumbent> = None;
    let mut best_cost = f64::INFINITY;
    let mut remaining = limit;
    loop {
        if remaining == Some(0) {
            break;
        }
        let path = candidate_path(request, permutations.current());
        let totals = evaluator.evaluate(&path)?;
        *evaluated = evaluated.saturating_add(1);

        if totals.cost < best_cost {
            log::trace!(
                "candidate {} improves cost to {}",
                permutations.rank(),
                totals.cost
            );
            best_cost = totals.cost;
            incumbent = Some(Incumbent {
                rank: permutations.rank(),
                path: path.iter().map(|&location| location.to_owned()).collect(),
                totals,
            });
        }

        remaining = remaining.map(|count| count.saturating_sub(1));
        if !permutations.advance() {
            break;
        }
    }
    Ok(incumbent)
}

fn candidate_path<'a>(request: &'a SolveRequest, stops: &'a [String]) -> Vec<&'a str> {
    let mut path = Vec::with_capacity(stops.len().saturating_add(2));
    path.push(request.start.as_str());
    path.extend(stops.iter().map(String::as_str));
    path.push(request.end.as_str());
    path
}

pub(crate) fn into_response(incumbent: Option<Incumbent>, diagnostics: Diagnostics) -> SolveResponse {
    match incumbent {
        Some(Incumbent { path, totals, .. }) => SolveResponse {
            path,
            min_cost: totals.cost,
            total_distance: totals.distance,
            total_duration: totals.duration,
            diagnostics,
        },
        None => SolveResponse {
            path: Vec::new(),
            min_cost: f64::INFINITY,
            total_distance: 0.0,
            total_duration: 0.0,
            diagnostics,
        },
    }
}

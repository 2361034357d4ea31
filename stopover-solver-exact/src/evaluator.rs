//! Pricing of a single candidate route.

use stopover_core::{CostWeights, Edge, GraphStore, SolveError};

/// Aggregated totals for one route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteCost {
    /// Sum of weighted edge costs.
    pub cost: f64,
    /// Sum of edge distances.
    pub distance: f64,
    /// Sum of edge durations.
    pub duration: f64,
}

impl RouteCost {
    #[expect(
        clippy::float_arithmetic,
        reason = "route totals accumulate floating-point edge metrics"
    )]
    fn accumulate(&mut self, edge: &Edge, weights: &CostWeights) {
        self.cost += weights.cost(edge);
        self.distance += edge.distance;
        self.duration += edge.duration;
    }
}

/// Walks a full path and totals its cost, distance and duration.
///
/// # Examples
///
/// ```
/// use stopover_core::{CostWeights, Edge, Graph, SolveError};
/// use stopover_solver_exact::RouteEvaluator;
///
/// let graph = Graph::new()
///     .with_edge("S", "A", Edge::new(1.0, 2.0))
///     .with_edge("A", "E", Edge::new(3.0, 4.0));
/// let evaluator = RouteEvaluator::new(&graph, CostWeights::new(1.0, 1.0));
///
/// let totals = evaluator.evaluate(&["S", "A", "E"])?;
/// assert_eq!(totals.cost, 10.0);
/// assert_eq!(totals.distance, 4.0);
///
/// let err = evaluator.evaluate(&["S", "E"]).unwrap_err();
/// assert_eq!(err, SolveError::edge_not_found("S", "E"));
/// # Ok::<(), SolveError>(())
/// ```
#[derive(Debug)]
pub struct RouteEvaluator<'a, G: ?Sized> {
    graph: &'a G,
    weights: CostWeights,
}

impl<'a, G> RouteEvaluator<'a, G>
where
    G: GraphStore + ?Sized,
{
    /// Construct an evaluator borrowing `graph` for its lifetime.
    pub const fn new(graph: &'a G, weights: CostWeights) -> Self {
        Self { graph, weights }
    }

    /// Total the consecutive edges of `path`.
    ///
    /// Paths with fewer than two locations have no edges and cost nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EdgeNotFound`] for the first consecutive pair
    /// without an edge; no partial totals are produced.
    pub fn evaluate<S: AsRef<str>>(&self, path: &[S]) -> Result<RouteCost, SolveError> {
        let mut totals = RouteCost::default();
        for pair in path.windows(2) {
            if let [from, to] = pair {
                let edge = self.graph.lookup(from.as_ref(), to.as_ref())?;
                totals.accumulate(&edge, &self.weights);
            }
        }
        Ok(totals)
    }
}

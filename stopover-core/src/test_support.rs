//! Test-only graph fixtures and a reference brute-force solver.
//!
//! Enabled for unit tests and, for downstream crates, behind the
//! `test-support` feature.

use std::cell::Cell;

use crate::{Edge, Graph, GraphStore, SolveError, SolveRequest};

/// The six-edge graph used throughout the documentation.
///
/// `S→A(1,1)`, `A→B(2,2)`, `B→E(1,1)`, `S→B(5,5)`, `B→A(5,5)` and
/// `A→E(1,1)`. With stops `[A, B]` and distance-only weights the best route
/// is `S-A-B-E` at cost 4.
#[must_use]
pub fn worked_example_graph() -> Graph {
    Graph::from_iter([
        ("S", "A", Edge::new(1.0, 1.0)),
        ("A", "B", Edge::new(2.0, 2.0)),
        ("B", "E", Edge::new(1.0, 1.0)),
        ("S", "B", Edge::new(5.0, 5.0)),
        ("B", "A", Edge::new(5.0, 5.0)),
        ("A", "E", Edge::new(1.0, 1.0)),
    ])
}

/// Build a graph with an edge between every ordered pair of `locations`,
/// self-loops included.
///
/// `metric` receives the positions of the source and target in `locations`.
#[must_use]
pub fn complete_graph<F>(locations: &[&str], metric: F) -> Graph
where
    F: Fn(usize, usize) -> Edge,
{
    let mut graph = Graph::new();
    for (from_index, from) in locations.iter().enumerate() {
        for (to_index, to) in locations.iter().enumerate() {
            graph.insert_edge(*from, *to, metric(from_index, to_index));
        }
    }
    graph
}

/// [`GraphStore`] wrapper counting how many lookups reach the inner graph.
#[derive(Debug)]
pub struct CountingGraph<G> {
    inner: G,
    lookups: Cell<u64>,
}

impl<G: GraphStore> CountingGraph<G> {
    /// Wrap `inner` with a zeroed lookup counter.
    #[must_use]
    pub const fn new(inner: G) -> Self {
        Self {
            inner,
            lookups: Cell::new(0),
        }
    }

    /// Number of edge lookups performed so far.
    #[must_use]
    pub fn lookups(&self) -> u64 {
        self.lookups.get()
    }
}

impl<G: GraphStore> GraphStore for CountingGraph<G> {
    fn edge(&self, from: &str, to: &str) -> Option<Edge> {
        self.lookups.set(self.lookups.get().saturating_add(1));
        self.inner.edge(from, to)
    }
}

/// Minimum cost over every ordering of the request's stops.
///
/// Enumerates orderings recursively, independent of any solver crate, so it
/// can serve as an oracle. Returns `Ok(None)` when no ordering has a cost
/// below infinity.
///
/// # Errors
///
/// Returns [`SolveError::EdgeNotFound`] for the first missing edge met, in
/// this function's own visiting order.
pub fn reference_min_cost<G: GraphStore + ?Sized>(
    graph: &G,
    request: &SolveRequest,
) -> Result<Option<f64>, SolveError> {
    let mut remaining: Vec<&str> = request.required_stops.iter().map(String::as_str).collect();
    let mut prefix = vec![request.start.as_str()];
    let mut best: Option<f64> = None;
    visit(graph, request, &mut prefix, &mut remaining, &mut best)?;
    Ok(best)
}

fn visit<'a, G: GraphStore + ?Sized>(
    graph: &G,
    request: &'a SolveRequest,
    prefix: &mut Vec<&'a str>,
    remaining: &mut Vec<&'a str>,
    best: &mut Option<f64>,
) -> Result<(), SolveError> {
    if remaining.is_empty() {
        prefix.push(request.end.as_str());
        let candidate = path_cost(graph, request, prefix);
        prefix.pop();
        let cost = candidate?;
        if best.is_none_or(|current| cost < current) && cost < f64::INFINITY {
            *best = Some(cost);
        }
        return Ok(());
    }
    for index in 0..remaining.len() {
        let stop = remaining.remove(index);
        prefix.push(stop);
        let outcome = visit(graph, request, prefix, remaining, best);
        prefix.pop();
        remaining.insert(index, stop);
        outcome?;
    }
    Ok(())
}

#[expect(
    clippy::float_arithmetic,
    reason = "reference costs are summed directly from edge metrics"
)]
fn path_cost<G: GraphStore + ?Sized>(
    graph: &G,
    request: &SolveRequest,
    path: &[&str],
) -> Result<f64, SolveError> {
    let mut cost = 0.0;
    for pair in path.windows(2) {
        if let [from, to] = pair {
            let edge = graph.lookup(from, to)?;
            cost += request.weights.distance * edge.distance
                + request.weights.duration * edge.duration;
        }
    }
    Ok(cost)
}

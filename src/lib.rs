//! Facade crate for the stopover route solver.
//!
//! This crate re-exports the core domain types and exposes the exact solver
//! behind the `solver-exact` feature.
//!
//! ```
//! # #[cfg(feature = "solver-exact")]
//! # {
//! use stopover::{CostWeights, Edge, ExhaustiveSolver, Graph, SolveRequest};
//!
//! let graph = Graph::new()
//!     .with_edge("Home", "Bakery", Edge::new(1.2, 4.0))
//!     .with_edge("Bakery", "Office", Edge::new(2.0, 6.0));
//! let request = SolveRequest::new("Home", "Office", ["Bakery"], CostWeights::new(1.0, 0.1));
//! let response = ExhaustiveSolver::new().solve_with(&graph, &request)?;
//! assert_eq!(response.path, ["Home", "Bakery", "Office"]);
//! # }
//! # Ok::<(), stopover::SolveError>(())
//! ```

#![forbid(unsafe_code)]

pub use stopover_core::{
    CostWeights, Diagnostics, Edge, Graph, GraphStore, SolveError, SolveRequest, SolveResponse,
    Solver,
};

#[cfg(feature = "solver-exact")]
pub use stopover_solver_exact::{
    ExhaustiveSolver, ExhaustiveSolverConfig, Permutations, RouteCost, RouteEvaluator,
    ShardOutcome, candidate_count, partition_ranks, solve,
};

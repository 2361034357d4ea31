//! Exact route solver for Stopover.
//!
//! This crate provides [`ExhaustiveSolver`], the default implementation of the
//! [`Solver`](stopover_core::Solver) trait. It enumerates every ordering of the
//! required stops in lexicographic order, prices each candidate route against
//! the caller's graph and keeps the strictly cheapest one, so the result is
//! provably optimal. The cost is `k!` evaluations for `k` stops; the solver is
//! meant for small stop counts.
//!
//! A missing edge aborts the whole search with
//! [`SolveError::EdgeNotFound`](stopover_core::SolveError::EdgeNotFound); the
//! solver never skips an infeasible candidate.
//!
//! Candidates can also be evaluated in rank ranges with
//! [`ExhaustiveSolver::solve_shard`] and combined with
//! [`ShardOutcome::merge`], which reproduces the sequential result exactly.
//!
//! # Examples
//!
//! ```
//! use stopover_core::{CostWeights, Edge, Graph, SolveRequest};
//! use stopover_solver_exact::ExhaustiveSolver;
//!
//! let graph = Graph::from_iter([
//!     ("S", "A", Edge::new(1.0, 1.0)),
//!     ("A", "B", Edge::new(2.0, 2.0)),
//!     ("B", "E", Edge::new(1.0, 1.0)),
//!     ("S", "B", Edge::new(5.0, 5.0)),
//!     ("B", "A", Edge::new(5.0, 5.0)),
//!     ("A", "E", Edge::new(1.0, 1.0)),
//! ]);
//! let request = SolveRequest::new("S", "E", ["B", "A"], CostWeights::distance_only());
//!
//! let response = ExhaustiveSolver::new().solve_with(&graph, &request)?;
//! assert_eq!(response.path, ["S", "A", "B", "E"]);
//! assert_eq!(response.min_cost, 4.0);
//! # Ok::<(), stopover_core::SolveError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod evaluator;
mod permutation;
mod solver;

pub use evaluator::{RouteCost, RouteEvaluator};
pub use permutation::{Permutations, candidate_count};
pub use solver::{ExhaustiveSolver, ExhaustiveSolverConfig, ShardOutcome, partition_ranks, solve};

//! Core domain types for the Stopover route solver.
//!
//! The crate describes the read-only road graph a solve runs against, the
//! linear cost model used to rank candidate routes, and the request, response
//! and error types shared by solver implementations. It performs no search
//! itself; see the `stopover-solver-exact` crate for the exhaustive solver.
//!
//! # Examples
//!
//! ```
//! use stopover_core::{CostWeights, Edge, Graph, GraphStore};
//!
//! let graph = Graph::new()
//!     .with_edge("Depot", "Market", Edge::new(2.0, 5.0))
//!     .with_edge("Market", "Depot", Edge::new(2.5, 6.0));
//!
//! let edge = graph.lookup("Depot", "Market")?;
//! let weights = CostWeights::new(1.0, 0.5);
//! assert_eq!(weights.cost(&edge), 4.5);
//! # Ok::<(), stopover_core::SolveError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cost;
mod edge;
mod error;
pub mod graph;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use cost::CostWeights;
pub use edge::Edge;
pub use error::SolveError;
pub use graph::{Adjacency, Graph, GraphStore};
pub use solver::{Diagnostics, SolveRequest, SolveResponse, Solver};

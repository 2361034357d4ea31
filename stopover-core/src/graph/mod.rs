//! Read-only access to the directed road graph.
//!
//! The [`GraphStore`] trait abstracts edge lookups between named locations.
//! Solvers only ever read through it; building the graph is the caller's
//! concern. [`Graph`] is the in-memory implementation used by the CLI and
//! tests, and plain nested `HashMap`s implement the trait as well.
//!
//! Location identifiers match exactly and case-sensitively.

mod adjacency;
mod store;

pub use adjacency::{Adjacency, Graph};
pub use store::GraphStore;

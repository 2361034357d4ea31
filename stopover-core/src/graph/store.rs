//! Edge lookup trait and its blanket implementations.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::{Edge, SolveError};

/// Resolve directed edges between named locations.
///
/// Implementers provide [`GraphStore::edge`]; [`GraphStore::lookup`] turns a
/// missing connection into [`SolveError::EdgeNotFound`]. The absence of the
/// source location and the absence of the target under it are both reported
/// the same way.
///
/// # Examples
///
/// ```rust
/// use stopover_core::{Edge, GraphStore, SolveError};
///
/// struct Shuttle;
///
/// impl GraphStore for Shuttle {
///     fn edge(&self, from: &str, to: &str) -> Option<Edge> {
///         (from == "Terminal" && to == "Hotel").then(|| Edge::new(3.0, 9.0))
///     }
/// }
///
/// assert_eq!(Shuttle.lookup("Terminal", "Hotel"), Ok(Edge::new(3.0, 9.0)));
/// assert_eq!(
///     Shuttle.lookup("Hotel", "Terminal"),
///     Err(SolveError::edge_not_found("Hotel", "Terminal")),
/// );
/// ```
pub trait GraphStore {
    /// Return the directed edge from `from` to `to`, if one exists.
    fn edge(&self, from: &str, to: &str) -> Option<Edge>;

    /// Return the directed edge from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EdgeNotFound`] naming both endpoints when the
    /// graph has no such edge.
    fn lookup(&self, from: &str, to: &str) -> Result<Edge, SolveError> {
        self.edge(from, to)
            .ok_or_else(|| SolveError::edge_not_found(from, to))
    }
}

impl<G> GraphStore for &G
where
    G: GraphStore + ?Sized,
{
    fn edge(&self, from: &str, to: &str) -> Option<Edge> {
        (**self).edge(from, to)
    }
}

impl<S, T> GraphStore for HashMap<String, HashMap<String, Edge, T>, S>
where
    S: BuildHasher,
    T: BuildHasher,
{
    fn edge(&self, from: &str, to: &str) -> Option<Edge> {
        self.get(from).and_then(|targets| targets.get(to)).copied()
    }
}

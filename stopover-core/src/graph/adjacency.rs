//! In-memory adjacency graph keyed by location name.

use std::collections::HashMap;

use super::GraphStore;
use crate::Edge;

/// Nested adjacency map: source location to target location to edge.
pub type Adjacency = HashMap<String, HashMap<String, Edge>>;

/// Directed graph of named locations backed by an [`Adjacency`] map.
///
/// The builder methods exist so callers can assemble a graph before solving;
/// solvers borrow it read-only through [`GraphStore`].
///
/// # Examples
///
/// ```
/// use stopover_core::{Edge, Graph, GraphStore};
///
/// let graph = Graph::new()
///     .with_edge("S", "A", Edge::new(1.0, 1.0))
///     .with_edge("A", "E", Edge::new(2.0, 3.0));
///
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains_location("E"));
/// assert!(graph.lookup("E", "A").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Graph {
    adjacency: Adjacency,
}

impl Graph {
    /// Construct an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the graph with an additional directed edge.
    ///
    /// An existing edge between the same endpoints is replaced.
    #[must_use]
    pub fn with_edge(mut self, from: impl Into<String>, to: impl Into<String>, edge: Edge) -> Self {
        self.insert_edge(from, to, edge);
        self
    }

    /// Insert a directed edge, returning the edge it replaced, if any.
    pub fn insert_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        edge: Edge,
    ) -> Option<Edge> {
        self.adjacency
            .entry(from.into())
            .or_default()
            .insert(to.into(), edge)
    }

    /// Whether `location` is the source or the target of any edge.
    #[must_use]
    pub fn contains_location(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
            || self
                .adjacency
                .values()
                .any(|targets| targets.contains_key(location))
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }

    /// Whether the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }
}

impl GraphStore for Graph {
    fn edge(&self, from: &str, to: &str) -> Option<Edge> {
        self.adjacency.edge(from, to)
    }
}

impl<F, T> FromIterator<(F, T, Edge)> for Graph
where
    F: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, T, Edge)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (from, to, edge) in iter {
            graph.insert_edge(from, to, edge);
        }
        graph
    }
}

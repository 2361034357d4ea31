//! Directed connections between two locations.

/// Travel metrics for a single directed connection.
///
/// Values are non-negative by convention, but nothing here enforces that:
/// the graph is owned by the caller and taken as given.
///
/// # Examples
///
/// ```
/// use stopover_core::Edge;
///
/// let edge = Edge::new(12.5, 18.0);
/// assert_eq!(edge.distance, 12.5);
/// assert_eq!(edge.duration, 18.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Distance covered when travelling along the edge.
    pub distance: f64,
    /// Time taken to travel along the edge.
    pub duration: f64,
}

impl Edge {
    /// Construct an edge from its distance and duration.
    #[must_use]
    pub const fn new(distance: f64, duration: f64) -> Self {
        Self { distance, duration }
    }
}

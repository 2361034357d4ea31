//! Linear cost model combining distance and duration.

use crate::Edge;

/// Weights applied to an edge's distance and duration to obtain its cost.
///
/// Any real values are accepted, including negative or zero weights; the
/// caller decides what they mean. Cost is a ranking scalar, not a unit.
///
/// # Examples
///
/// ```
/// use stopover_core::{CostWeights, Edge};
///
/// let weights = CostWeights::new(0.5, 0.5);
/// assert_eq!(weights.cost(&Edge::new(10.0, 20.0)), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostWeights {
    /// Multiplier applied to edge distance.
    pub distance: f64,
    /// Multiplier applied to edge duration.
    pub duration: f64,
}

impl CostWeights {
    /// Construct weights from the distance and duration multipliers.
    #[must_use]
    pub const fn new(distance: f64, duration: f64) -> Self {
        Self { distance, duration }
    }

    /// Weights that rank routes by distance alone.
    #[must_use]
    pub const fn distance_only() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Weights that rank routes by duration alone.
    #[must_use]
    pub const fn duration_only() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Cost of travelling along `edge`.
    ///
    /// Computes `distance * edge.distance + duration * edge.duration`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the cost model is a weighted sum of edge metrics"
    )]
    pub fn cost(&self, edge: &Edge) -> f64 {
        self.distance * edge.distance + self.duration * edge.duration
    }
}

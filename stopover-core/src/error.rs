//! Errors surfaced by graph lookups and solvers.

use thiserror::Error;

/// Errors returned by [`GraphStore::lookup`](crate::GraphStore::lookup) and
/// [`Solver::solve`](crate::Solver::solve).
///
/// A missing edge is never contained to the candidate that hit it: solvers
/// propagate it and abandon the whole search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The graph has no directed edge between the two locations.
    #[error("no edge from `{from}` to `{to}`")]
    EdgeNotFound {
        /// Location the edge should leave from.
        from: String,
        /// Location the edge should arrive at.
        to: String,
    },
    /// The number of stop orderings exceeds the configured candidate limit.
    #[error("{stops} required stops exceed the limit of {limit} candidate routes")]
    TooManyCandidates {
        /// Number of required stops in the request.
        stops: usize,
        /// Configured upper bound on candidate routes.
        limit: u64,
    },
    /// The number of stop orderings does not fit in a `u64` rank.
    #[error("{stops} required stops have more candidate routes than a u64 rank can address")]
    RankSpaceOverflow {
        /// Number of required stops in the request.
        stops: usize,
    },
}

impl SolveError {
    /// Build an [`SolveError::EdgeNotFound`] for the given endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use stopover_core::SolveError;
    ///
    /// let err = SolveError::edge_not_found("Depot", "Market");
    /// assert_eq!(err.to_string(), "no edge from `Depot` to `Market`");
    /// ```
    #[must_use]
    pub fn edge_not_found(from: &str, to: &str) -> Self {
        Self::EdgeNotFound {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }
}

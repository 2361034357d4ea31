//! Rank-range evaluation and deterministic merging of partial results.
//!
//! A shard covers a contiguous range of enumeration ranks. Outcomes merge
//! associatively and commutatively: the lowest-ranked failure wins outright,
//! otherwise the cheapest candidate wins and equal costs go to the lower rank.
//! Merging the outcomes of any partition of the ranks therefore reproduces the
//! sequential solve, whatever order the shards finish in.

use std::cmp::Ordering;
use std::ops::Range;
use std::time::Instant;

use stopover_core::{Diagnostics, GraphStore, SolveError, SolveRequest, SolveResponse};

use super::{ExhaustiveSolver, Incumbent, into_response, scan};
use crate::{Permutations, RouteCost, RouteEvaluator, candidate_count};

/// Result of evaluating one rank range.
#[derive(Debug, Clone, PartialEq)]
pub enum ShardOutcome {
    /// No candidate in the range produced a finite, comparable cost.
    Empty,
    /// Cheapest candidate in the range.
    Best {
        /// Enumeration rank of the candidate.
        rank: u64,
        /// Start, stop ordering, end.
        path: Vec<String>,
        /// Cost, distance and duration of `path`.
        totals: RouteCost,
    },
    /// A candidate in the range needed a missing edge.
    Failed {
        /// Enumeration rank of the failing candidate.
        rank: u64,
        /// The missing-edge error.
        error: SolveError,
    },
}

impl ShardOutcome {
    /// Combine two outcomes as if their ranges had been solved in one pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use stopover_core::SolveError;
    /// use stopover_solver_exact::{RouteCost, ShardOutcome};
    ///
    /// let cheap = ShardOutcome::Best {
    ///     rank: 4,
    ///     path: vec!["S".into(), "E".into()],
    ///     totals: RouteCost { cost: 1.0, distance: 1.0, duration: 1.0 },
    /// };
    /// let failed = ShardOutcome::Failed {
    ///     rank: 7,
    ///     error: SolveError::edge_not_found("A", "B"),
    /// };
    /// assert_eq!(cheap.clone().merge(failed.clone()), failed);
    /// assert_eq!(cheap.clone().merge(ShardOutcome::Empty), cheap);
    /// ```
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (
                Self::Failed {
                    rank: left_rank,
                    error: left_error,
                },
                Self::Failed {
                    rank: right_rank,
                    error: right_error,
                },
            ) => {
                if right_rank < left_rank {
                    Self::Failed {
                        rank: right_rank,
                        error: right_error,
                    }
                } else {
                    Self::Failed {
                        rank: left_rank,
                        error: left_error,
                    }
                }
            }
            (failed @ Self::Failed { .. }, _) | (_, failed @ Self::Failed { .. }) => failed,
            (Self::Empty, outcome) | (outcome, Self::Empty) => outcome,
            (left @ Self::Best { .. }, right @ Self::Best { .. }) => {
                if prefers(&right, &left) { right } else { left }
            }
        }
    }

    /// Convert the merged outcome of a full rank range into a response.
    ///
    /// # Errors
    ///
    /// Returns the error carried by [`ShardOutcome::Failed`].
    pub fn into_response(self, diagnostics: Diagnostics) -> Result<SolveResponse, SolveError> {
        match self {
            Self::Failed { error, .. } => Err(error),
            Self::Empty => Ok(into_response(None, diagnostics)),
            Self::Best { rank, path, totals } => Ok(into_response(
                Some(Incumbent { rank, path, totals }),
                diagnostics,
            )),
        }
    }
}

/// Whether `candidate` should replace `incumbent`; both must be `Best`.
fn prefers(candidate: &ShardOutcome, incumbent: &ShardOutcome) -> bool {
    let (
        ShardOutcome::Best {
            rank: candidate_rank,
            totals: candidate_totals,
            ..
        },
        ShardOutcome::Best {
            rank: incumbent_rank,
            totals: incumbent_totals,
            ..
        },
    ) = (candidate, incumbent)
    else {
        return false;
    };
    match candidate_totals.cost.partial_cmp(&incumbent_totals.cost) {
        Some(Ordering::Less) => true,
        Some(Ordering::Greater) => false,
        _ => candidate_rank < incumbent_rank,
    }
}

/// Split `0..total` into at most `shards` contiguous, non-empty ranges.
///
/// Earlier ranges take the remainder, so sizes differ by at most one.
///
/// # Examples
///
/// ```
/// use stopover_solver_exact::partition_ranks;
///
/// assert_eq!(partition_ranks(7, 3), vec![0..3, 3..5, 5..7]);
/// assert_eq!(partition_ranks(2, 4), vec![0..1, 1..2]);
/// assert!(partition_ranks(5, 0).is_empty());
/// ```
#[must_use]
pub fn partition_ranks(total: u64, shards: u64) -> Vec<Range<u64>> {
    let count = shards.min(total);
    let (Some(size), Some(extra)) = (total.checked_div(count), total.checked_rem(count)) else {
        return Vec::new();
    };
    let mut ranges = Vec::new();
    let mut start = 0_u64;
    for index in 0..count {
        let len = if index < extra { size.saturating_add(1) } else { size };
        let end = start.saturating_add(len);
        ranges.push(start..end);
        start = end;
    }
    ranges
}

impl ExhaustiveSolver {
    /// Evaluate only the candidates whose enumeration rank lies in `ranks`.
    ///
    /// Ranks past the last ordering are ignored. A missing edge ends the shard
    /// and is reported with the rank of the candidate that needed it.
    pub fn solve_shard<G>(&self, graph: &G, request: &SolveRequest, ranks: Range<u64>) -> ShardOutcome
    where
        G: GraphStore + ?Sized,
    {
        let Some(mut permutations) =
            Permutations::at_rank(request.required_stops.iter().cloned(), ranks.start)
        else {
            return ShardOutcome::Empty;
        };
        let span = ranks.end.saturating_sub(ranks.start);
        let evaluator = RouteEvaluator::new(graph, request.weights);
        let mut evaluated = 0_u64;
        match scan(&evaluator, request, &mut permutations, Some(span), &mut evaluated) {
            Ok(Some(Incumbent { rank, path, totals })) => ShardOutcome::Best { rank, path, totals },
            Ok(None) => ShardOutcome::Empty,
            Err(error) => ShardOutcome::Failed {
                rank: permutations.rank(),
                error,
            },
        }
    }

    /// Solve `request` in up to `shards` rank ranges and merge the outcomes.
    ///
    /// The shards run one after another here; the result is identical to
    /// [`ExhaustiveSolver::solve_with`] except that every shard is visited,
    /// so `candidates_evaluated` counts the whole range.
    ///
    /// # Errors
    ///
    /// Returns the lowest-ranked [`SolveError::EdgeNotFound`], the same error
    /// the sequential solve reports, [`SolveError::TooManyCandidates`], or
    /// [`SolveError::RankSpaceOverflow`] when `k!` does not fit in a `u64`.
    pub fn solve_sharded<G>(
        &self,
        graph: &G,
        request: &SolveRequest,
        shards: u64,
    ) -> Result<SolveResponse, SolveError>
    where
        G: GraphStore + ?Sized,
    {
        self.check_candidate_limit(request)?;
        let started_at = Instant::now();
        let stops = request.required_stops.len();
        let total = candidate_count(stops).ok_or(SolveError::RankSpaceOverflow { stops })?;

        let merged = partition_ranks(total, shards.max(1))
            .into_iter()
            .map(|ranks| self.solve_shard(graph, request, ranks))
            .fold(ShardOutcome::Empty, ShardOutcome::merge);

        merged.into_response(Diagnostics {
            solve_time: started_at.elapsed(),
            candidates_evaluated: total,
        })
    }
}

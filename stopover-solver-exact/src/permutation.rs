//! Lexicographic enumeration of required-stop orderings.
//!
//! The engine permutes an explicit buffer of *positions* into the sorted stop
//! list and mirrors every move onto the stop values. Permuting positions
//! rather than values means duplicate stops still yield exactly `k!`
//! orderings, some of them equal as value sequences, while distinct stops
//! behave exactly like value-level next-permutation. With duplicates the
//! emitted value sequences are not monotone, but the first appearance of each
//! distinct sequence comes in strictly ascending lexicographic order, so a
//! strict `<` scan still keeps the lexicographically smallest tied route.

/// Number of orderings of `stops` items, or `None` if `stops!` overflows
/// `u64`.
///
/// # Examples
///
/// ```
/// use stopover_solver_exact::candidate_count;
///
/// assert_eq!(candidate_count(0), Some(1));
/// assert_eq!(candidate_count(5), Some(120));
/// assert_eq!(candidate_count(21), None);
/// ```
#[must_use]
pub fn candidate_count(stops: usize) -> Option<u64> {
    (1..=u64::try_from(stops).ok()?).try_fold(1_u64, u64::checked_mul)
}

/// Restartable, order-stable enumeration of stop orderings.
///
/// The first ordering is the byte-wise ascending sort of the stops;
/// [`Permutations::advance`] steps to the next one until the positions are
/// fully descending. The struct also implements [`Iterator`], yielding owned
/// orderings starting with the current one.
///
/// # Examples
///
/// ```
/// use stopover_solver_exact::Permutations;
///
/// let mut permutations = Permutations::new(["b", "a", "c"]);
/// assert_eq!(permutations.current(), ["a", "b", "c"]);
/// assert!(permutations.advance());
/// assert_eq!(permutations.current(), ["a", "c", "b"]);
/// assert_eq!(permutations.rank(), 1);
/// assert_eq!(permutations.count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutations {
    positions: Vec<usize>,
    values: Vec<String>,
    rank: u64,
    state: IterState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IterState {
    Pending,
    Yielded,
    Exhausted,
}

impl Permutations {
    /// Start an enumeration at the ascending ordering of `stops`.
    pub fn new<I>(stops: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut values: Vec<String> = stops.into_iter().map(Into::into).collect();
        values.sort();
        let positions = (0..values.len()).collect();
        Self {
            positions,
            values,
            rank: 0,
            state: IterState::Pending,
        }
    }

    /// Start an enumeration at the ordering with the given zero-based `rank`.
    ///
    /// Returns `None` when `rank` is not below the number of orderings. The
    /// result is identical to calling [`Permutations::advance`] `rank` times
    /// on [`Permutations::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use stopover_solver_exact::Permutations;
    ///
    /// let last = Permutations::at_rank(["a", "b", "c"], 5).expect("rank 5 of 6");
    /// assert_eq!(last.current(), ["c", "b", "a"]);
    /// assert!(Permutations::at_rank(["a", "b", "c"], 6).is_none());
    /// ```
    pub fn at_rank<I>(stops: I, rank: u64) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let sorted = Self::new(stops);
        if candidate_count(sorted.len()).is_some_and(|total| rank >= total) {
            return None;
        }

        let mut pool: Vec<usize> = (0..sorted.len()).collect();
        let mut positions = Vec::with_capacity(pool.len());
        let mut remainder = rank;
        while !pool.is_empty() {
            let digit = match candidate_count(pool.len().saturating_sub(1)) {
                Some(block) => {
                    let digit = remainder.checked_div(block)?;
                    remainder = remainder.checked_rem(block)?;
                    digit
                }
                // A block larger than u64 always exceeds the remaining rank.
                None => 0,
            };
            let index = usize::try_from(digit).ok()?;
            if index >= pool.len() {
                return None;
            }
            positions.push(pool.remove(index));
        }

        let values = positions
            .iter()
            .map(|&position| sorted.values.get(position).cloned())
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            positions,
            values,
            rank,
            state: IterState::Pending,
        })
    }

    /// The ordering the engine currently holds.
    #[must_use]
    pub fn current(&self) -> &[String] {
        &self.values
    }

    /// Zero-based position of the current ordering in enumeration order.
    #[must_use]
    pub const fn rank(&self) -> u64 {
        self.rank
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    /// Step to the next ordering in lexicographic order.
    ///
    /// Finds the rightmost position `i` smaller than its successor, swaps it
    /// with the rightmost larger position after it and reverses the suffix.
    /// Returns `false`, leaving the buffer untouched, once the positions are
    /// fully descending.
    pub fn advance(&mut self) -> bool {
        let Some(pivot) = self
            .positions
            .windows(2)
            .rposition(|pair| matches!(pair, [left, right] if left < right))
        else {
            return false;
        };
        let Some(&pivot_value) = self.positions.get(pivot) else {
            return false;
        };
        let Some(successor) = self
            .positions
            .iter()
            .rposition(|&position| position > pivot_value)
        else {
            return false;
        };

        self.positions.swap(pivot, successor);
        self.values.swap(pivot, successor);
        let suffix = pivot.saturating_add(1);
        if let Some(tail) = self.positions.get_mut(suffix..) {
            tail.reverse();
        }
        if let Some(tail) = self.values.get_mut(suffix..) {
            tail.reverse();
        }
        self.rank = self.rank.saturating_add(1);
        true
    }
}

impl Iterator for Permutations {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            IterState::Exhausted => return None,
            IterState::Yielded => {
                if !self.advance() {
                    self.state = IterState::Exhausted;
                    return None;
                }
            }
            IterState::Pending => self.state = IterState::Yielded,
        }
        Some(self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect(stops: &[&str]) -> Vec<Vec<String>> {
        Permutations::new(stops.iter().copied()).collect()
    }

    #[rstest]
    fn enumerates_in_lexicographic_order() {
        let orderings = collect(&["c", "a", "b"]);
        let expected = [
            ["a", "b", "c"],
            ["a", "c", "b"],
            ["b", "a", "c"],
            ["b", "c", "a"],
            ["c", "a", "b"],
            ["c", "b", "a"],
        ];
        assert_eq!(orderings, expected);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(4, 24)]
    #[case(6, 720)]
    fn produces_factorial_many_orderings(#[case] stops: usize, #[case] expected: usize) {
        let names: Vec<String> = (0..stops).map(|index| format!("stop-{index}")).collect();
        assert_eq!(Permutations::new(names).count(), expected);
    }

    #[rstest]
    fn empty_stops_yield_one_empty_ordering() {
        let orderings = collect(&[]);
        assert_eq!(orderings, vec![Vec::<String>::new()]);
    }

    #[rstest]
    fn duplicates_are_preserved_as_positions() {
        let orderings = collect(&["A", "A"]);
        assert_eq!(orderings, vec![vec!["A", "A"], vec!["A", "A"]]);
    }

    #[rstest]
    fn duplicates_repeat_value_sequences() {
        let orderings = collect(&["B", "A", "A"]);
        let expected = [
            ["A", "A", "B"],
            ["A", "B", "A"],
            ["A", "A", "B"],
            ["A", "B", "A"],
            ["B", "A", "A"],
            ["B", "A", "A"],
        ];
        assert_eq!(orderings, expected);
    }

    #[rstest]
    #[case(&["B", "A", "A"])]
    #[case(&["c", "a", "c", "b"])]
    #[case(&["x", "x", "y", "y", "x"])]
    fn first_appearances_are_strictly_increasing(#[case] stops: &[&str]) {
        let mut first_seen: Vec<Vec<String>> = Vec::new();
        for ordering in collect(stops) {
            if !first_seen.contains(&ordering) {
                first_seen.push(ordering);
            }
        }
        assert!(first_seen.windows(2).all(|pair| matches!(pair, [a, b] if a < b)));
    }

    #[rstest]
    fn sorts_byte_wise() {
        let mut permutations = Permutations::new(["b", "B", "a", "A"]);
        assert_eq!(permutations.current(), ["A", "B", "a", "b"]);
        assert!(permutations.advance());
        assert_eq!(permutations.current(), ["A", "B", "b", "a"]);
    }

    #[rstest]
    fn advance_stops_at_descending_order() {
        let mut permutations = Permutations::new(["a", "b"]);
        assert!(permutations.advance());
        assert!(!permutations.advance());
        assert_eq!(permutations.current(), ["b", "a"]);
        assert_eq!(permutations.rank(), 1);
    }

    #[rstest]
    fn at_rank_matches_sequential_enumeration() {
        let stops = ["d", "a", "c", "b"];
        for (rank, expected) in Permutations::new(stops).enumerate() {
            let rank = u64::try_from(rank).expect("small rank");
            let jumped = Permutations::at_rank(stops, rank).expect("rank in range");
            assert_eq!(jumped.current(), expected.as_slice());
            assert_eq!(jumped.rank(), rank);
        }
    }

    #[rstest]
    fn at_rank_continues_enumeration() {
        let resumed: Vec<Vec<String>> = Permutations::at_rank(["a", "b", "c"], 3)
            .expect("rank in range")
            .collect();
        assert_eq!(resumed, [["b", "c", "a"], ["c", "a", "b"], ["c", "b", "a"]]);
    }

    #[rstest]
    fn at_rank_rejects_out_of_range() {
        assert!(Permutations::at_rank(Vec::<String>::new(), 1).is_none());
        assert!(Permutations::at_rank(["a", "b"], 2).is_none());
    }

    #[rstest]
    fn candidate_count_overflows_past_twenty() {
        assert_eq!(candidate_count(20), Some(2_432_902_008_176_640_000));
        assert_eq!(candidate_count(21), None);
    }
}

//! Single forward scan for a pair of positions summing to a target

use tracing::{debug, trace};

use crate::lookup::LookupTable;
use crate::pair::ResultPair;

/// Scan configuration.
///
/// Holds no state between calls; every [`find`](PairFinder::find) builds and
/// drops its own [`LookupTable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairFinder {
    /// Initial lookup table capacity, capped at the sequence length. `None`
    /// sizes it to the sequence length.
    pub capacity_hint: Option<usize>,
}

impl PairFinder {
    /// Create a finder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder that pre-sizes its table to `capacity` entries.
    pub fn with_capacity_hint(capacity: usize) -> Self {
        Self {
            capacity_hint: Some(capacity),
        }
    }

    /// Find the first pair of positions whose values sum to `target`.
    ///
    /// Walks `sequence` left to right. At index `j` the value still missing,
    /// `target - sequence[j]`, is looked up among the values already passed;
    /// on a hit the result is `(earliest index of that value, j)`. Otherwise
    /// `sequence[j]` is recorded, unless an earlier occurrence already is.
    ///
    /// When several pairs qualify, the one with the smallest second index
    /// wins, and for that index the earliest matching first index. A
    /// complement that overflows `i64` cannot have been seen and is skipped.
    ///
    /// Returns `None` when no pair exists.
    ///
    /// # Example
    ///
    /// ```
    /// use pairfinder::PairFinder;
    ///
    /// let finder = PairFinder::new();
    /// let pair = finder.find(&[1, 2, 3, 4, 5], 6).unwrap();
    /// assert_eq!(pair.indices(), (1, 3));
    ///
    /// assert_eq!(finder.find(&[], 0), None);
    /// ```
    pub fn find(&self, sequence: &[i64], target: i64) -> Option<ResultPair> {
        let capacity = self
            .capacity_hint
            .map_or(sequence.len(), |hint| hint.min(sequence.len()));
        let mut table = LookupTable::with_capacity(capacity);

        for (index, &value) in sequence.iter().enumerate() {
            if let Some(first) = target
                .checked_sub(value)
                .and_then(|complement| table.get(complement))
            {
                trace!(first, second = index, target, "pair found");
                return Some(ResultPair::ordered(first, index));
            }
            table.record(value, index);
        }

        debug!(
            len = sequence.len(),
            distinct = table.len(),
            target,
            "no pair found"
        );
        None
    }
}

/// Find the first pair of positions in `sequence` whose values sum to
/// `target`, using default settings.
///
/// See [`PairFinder::find`].
pub fn find(sequence: &[i64], target: i64) -> Option<ResultPair> {
    PairFinder::new().find(sequence, target)
}

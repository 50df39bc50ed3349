//! Value to earliest-index table used during a single scan

use indexmap::map::Entry;
use indexmap::IndexMap;

/// Maps each value seen so far to the first index it appeared at.
///
/// Recording a value that is already present leaves the stored index
/// untouched, so the table always answers with the earliest occurrence.
/// Entries are kept in the order values were first seen, which is also
/// ascending index order; `Debug` output lists them that way.
///
/// # Example
///
/// ```
/// use pairfinder::LookupTable;
///
/// let mut table = LookupTable::new();
/// assert!(table.record(3, 0));
/// assert!(!table.record(3, 1)); // duplicate keeps index 0
///
/// assert_eq!(table.get(3), Some(0));
/// assert_eq!(table.get(4), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    /// Insertion-ordered entries (value -> earliest index)
    entries: IndexMap<i64, usize>,
}

impl LookupTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` distinct values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Record `value` at `index` unless the value is already present.
    ///
    /// Returns `true` if the value was new.
    pub fn record(&mut self, value: i64, index: usize) -> bool {
        match self.entries.entry(value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(index);
                true
            }
        }
    }

    /// Earliest index recorded for `value`.
    pub fn get(&self, value: i64) -> Option<usize> {
        self.entries.get(&value).copied()
    }

    /// Number of distinct values recorded.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

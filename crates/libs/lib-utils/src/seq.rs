//! # Sequence Helpers
//!
//! Order-preserving deduplication helpers. One-off transformations
//! (map/filter/membership) belong on iterators; only the helpers with no
//! direct `std` equivalent live here.

use std::collections::HashSet;
use std::hash::Hash;

/// Collect the unique items of a slice, keeping first-occurrence order.
pub fn dedupe<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Collect the items that appear more than once, in encounter order.
///
/// Each item is emitted once per repeat occurrence: `[1, 1, 1]` yields
/// `[1, 1]`.
pub fn duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| !seen.insert((*item).clone()))
        .cloned()
        .collect()
}

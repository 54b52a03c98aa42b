//! Set operations.

use std::collections::BTreeSet;

/// Computes the set of all subsets of the input, including the empty set
/// and the full set.
///
/// Subsets are compared by value, so the result is a set of sets with
/// exactly `2^n` members for `n` distinct input elements; duplicate input
/// elements collapse. The expansion doubles the result per element, so
/// keep `n` small; this is a design and debugging helper, not a hot path.
///
/// # Examples
///
/// ```rust
/// use weft_util::sets::powerset;
///
/// let subsets = powerset(&[1, 2]);
/// assert_eq!(subsets.len(), 4);
/// let full: std::collections::BTreeSet<i32> = [1, 2].into_iter().collect();
/// assert!(subsets.contains(&full));
/// ```
pub fn powerset<T: Ord + Clone>(items: &[T]) -> BTreeSet<BTreeSet<T>> {
    let mut subsets = BTreeSet::new();
    subsets.insert(BTreeSet::new());
    for item in items {
        let mut extended = BTreeSet::new();
        for subset in &subsets {
            let mut with_item = subset.clone();
            with_item.insert(item.clone());
            extended.insert(with_item);
        }
        subsets.extend(extended);
    }
    subsets
}

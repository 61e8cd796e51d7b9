//! In-place quicksort with a Lomuto partition (last element as pivot).
//!
//! Unstable. Average O(n log n); already-sorted input or many equal keys
//! degrade to O(n²) time. Recursion only descends into the smaller side of
//! each partition, so stack depth stays O(log n) regardless of input.

use std::cmp::Ordering;

use crate::domain::Stock;
use crate::ordering::{SortDirection, SortKey};

/// Sort `items` in place by `cmp`.
pub fn quicksort_by<T, F>(items: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_slice(items, &cmp);
}

/// Sort stocks in place by `key` in `direction`.
pub fn quicksort(items: &mut [Stock], key: SortKey, direction: SortDirection) {
    quicksort_by(items, key.comparator(direction));
}

fn sort_slice<T, F>(mut items: &mut [T], cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let slice = std::mem::take(&mut items);
        let pivot = partition(slice, cmp);
        let (below, rest) = slice.split_at_mut(pivot);
        // rest[0] is the pivot in its final position
        let above = &mut rest[1..];
        if below.len() < above.len() {
            sort_slice(below, cmp);
            items = above;
        } else {
            sort_slice(above, cmp);
            items = below;
        }
    }
}

/// Lomuto partition. Every element strictly ordered before the pivot is
/// swapped into the growing left region; the pivot then lands just after it.
/// Returns the pivot's final index.
fn partition<T, F>(items: &mut [T], cmp: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let high = items.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if cmp(&items[j], &items[high]) == Ordering::Less {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}

//! Stable top-down mergesort returning a new vector.

use std::cmp::Ordering;

use crate::domain::Stock;
use crate::ordering::{SortDirection, SortKey};

/// Sorted copy of `items` by `cmp`. The input is left untouched.
///
/// On ties the element from the left run is taken first, so equal elements
/// keep their input order.
pub fn mergesort_by<T, F>(items: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut result = items.to_vec();
    if result.len() > 1 {
        let right = result.len() - 1;
        sort_range(&mut result, 0, right, &cmp);
    }
    result
}

/// Sorted copy of stocks by `key` in `direction`.
pub fn mergesort(items: &[Stock], key: SortKey, direction: SortDirection) -> Vec<Stock> {
    mergesort_by(items, key.comparator(direction))
}

fn sort_range<T, F>(items: &mut [T], left: usize, right: usize, cmp: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(items, left, mid, cmp);
        sort_range(items, mid + 1, right, cmp);
        merge(items, left, mid, right, cmp);
    }
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`.
fn merge<T, F>(items: &mut [T], left: usize, mid: usize, right: usize, cmp: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let left_run = items[left..=mid].to_vec();
    let right_run = items[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_run.len() && j < right_run.len() {
        if cmp(&left_run[i], &right_run[j]) != Ordering::Greater {
            items[k] = left_run[i].clone();
            i += 1;
        } else {
            items[k] = right_run[j].clone();
            j += 1;
        }
        k += 1;
    }
    for item in left_run[i..].iter().chain(&right_run[j..]) {
        items[k] = item.clone();
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_leaves_input() {
        let input = vec![4, 2, 7, 1];
        let sorted = mergesort_by(&input, |a, b| a.cmp(b));
        assert_eq!(sorted, vec![1, 2, 4, 7]);
        assert_eq!(input, vec![4, 2, 7, 1]);
    }

    #[test]
    fn stable_on_ties() {
        let input = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = mergesort_by(&input, |a, b| a.0.cmp(&b.0));
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn stable_on_ties_descending() {
        let input = vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        let sorted = mergesort_by(&input, |a, b| SortDirection::Descending.apply(a.0.cmp(&b.0)));
        assert_eq!(sorted, vec![(2, 'b'), (2, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn empty_and_singleton() {
        let empty: Vec<u8> = vec![];
        assert!(mergesort_by(&empty, |a, b| a.cmp(b)).is_empty());
        assert_eq!(mergesort_by(&[9], |a: &i32, b: &i32| a.cmp(b)), vec![9]);
    }
}

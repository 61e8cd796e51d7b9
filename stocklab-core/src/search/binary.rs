//! Binary searches over a stock collection.
//!
//! Each search sorts a defensive copy ascending by the searched field (with
//! the stable mergesort and the shared [`SortKey`] order) before narrowing,
//! so callers may pass data in any order. Returned indices refer to that
//! ascending order, not to the caller's slice.

use std::cmp::Ordering;

use crate::domain::Stock;
use crate::ordering::{cmp_ignore_case, SortDirection, SortKey};
use crate::sort::mergesort;

/// Absolute tolerance for price equality.
pub const PRICE_TOLERANCE: f64 = 0.01;

/// True when `a` and `b` are within [`PRICE_TOLERANCE`] of each other.
pub fn price_matches(a: f64, b: f64) -> bool {
    (a - b).abs() < PRICE_TOLERANCE
}

/// Narrow `[left, right]` over an ascending slice. `probe` reports where an
/// element sits relative to the target: `Less` = before it, `Equal` = match.
///
/// Returns the first matching index the narrowing hits, which with duplicate
/// (or near-duplicate) keys is not necessarily the lowest one.
pub fn bisect<T, F>(sorted: &[T], probe: F) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
{
    if sorted.is_empty() {
        return None;
    }
    let mut left = 0usize;
    let mut right = sorted.len() - 1;
    while left <= right {
        let mid = left + (right - left) / 2;
        match probe(&sorted[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            }
        }
    }
    None
}

fn symbol_probe(symbol: &str) -> impl Fn(&Stock) -> Ordering + '_ {
    move |s: &Stock| cmp_ignore_case(s.symbol(), symbol)
}

fn price_probe(price: f64) -> impl Fn(&Stock) -> Ordering {
    move |s: &Stock| {
        let p = s.current_price();
        if price_matches(p, price) {
            Ordering::Equal
        } else if p < price {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

fn year_probe(year: i32) -> impl Fn(&Stock) -> Ordering {
    move |s: &Stock| s.year_listed().cmp(&year)
}

fn ascending(stocks: &[Stock], key: SortKey) -> Vec<Stock> {
    mergesort(stocks, key, SortDirection::Ascending)
}

/// Index of `symbol` (case-insensitive) in the symbol-ascending order.
pub fn binary_search_by_symbol(stocks: &[Stock], symbol: &str) -> Option<usize> {
    let sorted = ascending(stocks, SortKey::Symbol);
    bisect(&sorted, symbol_probe(symbol.trim()))
}

/// Index of a stock priced within tolerance of `price`, in the
/// price-ascending order.
pub fn binary_search_by_price(stocks: &[Stock], price: f64) -> Option<usize> {
    let sorted = ascending(stocks, SortKey::Price);
    bisect(&sorted, price_probe(price))
}

/// Index of a stock listed in `year`, in the year-ascending order.
pub fn binary_search_by_year(stocks: &[Stock], year: i32) -> Option<usize> {
    let sorted = ascending(stocks, SortKey::YearListed);
    bisect(&sorted, year_probe(year))
}

/// The stock a price search lands on, rather than its index.
pub fn find_by_price(stocks: &[Stock], price: f64) -> Option<Stock> {
    let mut sorted = ascending(stocks, SortKey::Price);
    bisect(&sorted, price_probe(price)).map(|i| sorted.swap_remove(i))
}

/// The stock a year search lands on, rather than its index.
pub fn find_by_year(stocks: &[Stock], year: i32) -> Option<Stock> {
    let mut sorted = ascending(stocks, SortKey::YearListed);
    bisect(&sorted, year_probe(year)).map(|i| sorted.swap_remove(i))
}

/// First index in a price-ascending slice whose price is `>= min`.
pub fn lower_bound_by_price(sorted: &[Stock], min: f64) -> usize {
    sorted.partition_point(|s| s.current_price() < min)
}

/// All stocks priced in `[min, max]`, ascending by price.
///
/// Locates the start with a binary lower bound, then scans forward until a
/// price exceeds `max`.
pub fn search_by_price_range(stocks: &[Stock], min: f64, max: f64) -> Vec<Stock> {
    if stocks.is_empty() || min > max {
        return Vec::new();
    }
    let sorted = ascending(stocks, SortKey::Price);
    let start = lower_bound_by_price(&sorted, min);
    sorted[start..]
        .iter()
        .take_while(|s| s.current_price() <= max)
        .cloned()
        .collect()
}

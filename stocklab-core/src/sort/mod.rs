//! Comparison sorts over stock collections.
//!
//! - `quicksort`: in place, unstable, Lomuto partition
//! - `mergesort`: new vector, stable
//!
//! Both take a [`SortKey`] and [`SortDirection`] from the shared ordering
//! vocabulary, or an arbitrary comparator through the `_by` variants.

pub mod merge;
pub mod quick;

pub use merge::{mergesort, mergesort_by};
pub use quick::{quicksort, quicksort_by};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::Stock;
use crate::ordering::{SortDirection, SortKey};

/// Which algorithm produces a sorted view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Quick,
    #[default]
    Merge,
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Quick => f.write_str("quick"),
            SortAlgorithm::Merge => f.write_str("merge"),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick" | "quicksort" => Ok(SortAlgorithm::Quick),
            "merge" | "mergesort" => Ok(SortAlgorithm::Merge),
            other => Err(format!("unknown sort algorithm: {other}")),
        }
    }
}

/// Sorted copy of `items`; the input order is never changed.
pub fn sorted_copy(
    items: &[Stock],
    key: SortKey,
    direction: SortDirection,
    algorithm: SortAlgorithm,
) -> Vec<Stock> {
    match algorithm {
        SortAlgorithm::Merge => mergesort(items, key, direction),
        SortAlgorithm::Quick => {
            let mut copy = items.to_vec();
            quicksort(&mut copy, key, direction);
            copy
        }
    }
}

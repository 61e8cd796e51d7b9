//! Ordering vocabulary shared by the sort and search engines.
//!
//! "Sort by X" and "binary-search by X" both go through [`SortKey::compare`],
//! so a collection sorted ascending by a key is exactly the order the binary
//! searches on that key expect.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::Stock;

/// Case-insensitive lexicographic comparison.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Field a stock collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Symbol,
    Name,
    Price,
    MarketCap,
    Volume,
    YearListed,
    ChangePercent,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Symbol,
        SortKey::Name,
        SortKey::Price,
        SortKey::MarketCap,
        SortKey::Volume,
        SortKey::YearListed,
        SortKey::ChangePercent,
    ];

    /// Ascending total order on this field.
    ///
    /// Floats use `total_cmp`; callers validate out NaN before it reaches here.
    pub fn compare(self, a: &Stock, b: &Stock) -> Ordering {
        match self {
            SortKey::Symbol => cmp_ignore_case(a.symbol(), b.symbol()),
            SortKey::Name => cmp_ignore_case(a.company_name(), b.company_name()),
            SortKey::Price => a.current_price().total_cmp(&b.current_price()),
            SortKey::MarketCap => a.market_cap().total_cmp(&b.market_cap()),
            SortKey::Volume => a.volume().cmp(&b.volume()),
            SortKey::YearListed => a.year_listed().cmp(&b.year_listed()),
            SortKey::ChangePercent => a.change_percent().total_cmp(&b.change_percent()),
        }
    }

    /// Comparator for `key` in `direction`.
    pub fn comparator(self, direction: SortDirection) -> impl Fn(&Stock, &Stock) -> Ordering {
        move |a, b| direction.apply(self.compare(a, b))
    }

    fn as_str(self) -> &'static str {
        match self {
            SortKey::Symbol => "symbol",
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::MarketCap => "market-cap",
            SortKey::Volume => "volume",
            SortKey::YearListed => "year",
            SortKey::ChangePercent => "change",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "symbol" => Ok(SortKey::Symbol),
            "name" | "company" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "market-cap" | "marketcap" | "cap" => Ok(SortKey::MarketCap),
            "volume" => Ok(SortKey::Volume),
            "year" | "year-listed" => Ok(SortKey::YearListed),
            "change" | "change-percent" => Ok(SortKey::ChangePercent),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Map an ascending ordering into this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

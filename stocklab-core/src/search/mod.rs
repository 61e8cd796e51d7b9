//! Search engine: binary searches (exact, tolerance and range) and linear
//! scans (substring, multi-criteria, top-N).
//!
//! No search fails on "no result": absence is an empty vector or `None`.

pub mod binary;
pub mod linear;

pub use binary::{
    binary_search_by_price, binary_search_by_symbol, binary_search_by_year, bisect, find_by_price,
    find_by_year, lower_bound_by_price, price_matches, search_by_price_range, PRICE_TOLERANCE,
};
pub use linear::{
    find_by_symbol, find_top_gainers, find_top_losers, search, search_by_name, search_by_sector,
    StockFilter,
};

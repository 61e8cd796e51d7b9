//! Linear scans: substring and multi-criteria filters, top-N ranking, and
//! exact symbol lookup. Results keep input (insertion) order unless a
//! ranking says otherwise.

use serde::{Deserialize, Serialize};

use crate::domain::{normalize_symbol, Stock};
use crate::sort::mergesort_by;

/// Trimmed, lowercased needle; `None` when blank.
fn needle(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() {
        None
    } else {
        Some(q.to_lowercase())
    }
}

fn name_or_symbol_contains(stock: &Stock, needle: &str) -> bool {
    stock.company_name().to_lowercase().contains(needle)
        || stock.symbol().to_lowercase().contains(needle)
}

fn sector_contains(stock: &Stock, needle: &str) -> bool {
    stock.sector().to_lowercase().contains(needle)
}

/// Stocks whose company name or symbol contains `query`. A blank query
/// matches nothing.
pub fn search_by_name<'a>(stocks: &'a [Stock], query: &str) -> Vec<&'a Stock> {
    let Some(q) = needle(query) else {
        return Vec::new();
    };
    stocks.iter().filter(|s| name_or_symbol_contains(s, &q)).collect()
}

/// Stocks whose sector contains `sector`. A blank query matches nothing.
pub fn search_by_sector<'a>(stocks: &'a [Stock], sector: &str) -> Vec<&'a Stock> {
    let Some(q) = needle(sector) else {
        return Vec::new();
    };
    stocks.iter().filter(|s| sector_contains(s, &q)).collect()
}

/// Conjunctive multi-field filter. Unset (or blank) criteria always match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockFilter {
    /// Substring of company name or symbol.
    pub query: Option<String>,
    /// Substring of sector.
    pub sector: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl StockFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn matches(&self, stock: &Stock) -> bool {
        if let Some(q) = self.query.as_deref().and_then(needle) {
            if !name_or_symbol_contains(stock, &q) {
                return false;
            }
        }
        if let Some(q) = self.sector.as_deref().and_then(needle) {
            if !sector_contains(stock, &q) {
                return false;
            }
        }
        let price = stock.current_price();
        self.min_price.map_or(true, |min| price >= min)
            && self.max_price.map_or(true, |max| price <= max)
    }
}

/// All stocks matching `filter`, in input order.
pub fn search<'a>(stocks: &'a [Stock], filter: &StockFilter) -> Vec<&'a Stock> {
    stocks.iter().filter(|s| filter.matches(s)).collect()
}

/// Up to `limit` stocks with positive change, biggest gain first.
/// Ties keep input order. A limit of 0 yields nothing.
pub fn find_top_gainers(stocks: &[Stock], limit: usize) -> Vec<&Stock> {
    let gainers: Vec<&Stock> = stocks.iter().filter(|s| s.is_gainer()).collect();
    let mut ranked = mergesort_by(&gainers, |a, b| {
        b.change_percent().total_cmp(&a.change_percent())
    });
    ranked.truncate(limit);
    ranked
}

/// Up to `limit` stocks with negative change, biggest loss first.
/// Ties keep input order. A limit of 0 yields nothing.
pub fn find_top_losers(stocks: &[Stock], limit: usize) -> Vec<&Stock> {
    let losers: Vec<&Stock> = stocks.iter().filter(|s| s.is_loser()).collect();
    let mut ranked = mergesort_by(&losers, |a, b| {
        a.change_percent().total_cmp(&b.change_percent())
    });
    ranked.truncate(limit);
    ranked
}

/// Exact symbol match, trimmed and case-insensitive.
pub fn find_by_symbol<'a>(stocks: &'a [Stock], symbol: &str) -> Option<&'a Stock> {
    let key = normalize_symbol(symbol);
    stocks.iter().find(|s| s.key() == key)
}

//! Stock: the record every container, search and sort in the crate operates on.
//!
//! Identity is the case-normalized symbol: two `Stock` values compare equal
//! (and hash equally) when their symbols match ignoring case, whatever their
//! prices. `change_percent` is derived from the two price fields and is only
//! recomputed through [`Stock::set_current_price`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ids::StockId;

/// Trim and uppercase a symbol into its canonical key form.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Percentage move from `previous` to `current`. Zero when `previous` is zero.
pub fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Caller-supplied fields for a stock that does not exist yet.
///
/// The repository assigns the id and the added date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStock {
    pub symbol: String,
    pub company_name: String,
    pub sector: String,
    pub price: f64,
    pub market_cap: f64,
    pub volume: u64,
    pub year_listed: i32,
}

impl NewStock {
    pub fn new(
        symbol: impl Into<String>,
        company_name: impl Into<String>,
        sector: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
            sector: sector.into(),
            price,
            market_cap: 0.0,
            volume: 0,
            year_listed: 0,
        }
    }

    pub fn market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = market_cap;
        self
    }

    pub fn volume(mut self, volume: u64) -> Self {
        self.volume = volume;
        self
    }

    pub fn year_listed(mut self, year: i32) -> Self {
        self.year_listed = year;
        self
    }
}

/// A listed stock with its latest and previous price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    id: StockId,
    symbol: String,
    company_name: String,
    sector: String,
    current_price: f64,
    previous_price: f64,
    market_cap: f64,
    volume: u64,
    year_listed: i32,
    change_percent: f64,
    added_date: NaiveDateTime,
}

impl Stock {
    /// Build a stock from caller fields. The symbol is stored as given;
    /// the repository normalizes it before calling this.
    ///
    /// A fresh stock has `previous_price == current_price` and no change.
    pub fn new(id: StockId, fields: NewStock) -> Self {
        Self {
            id,
            symbol: fields.symbol,
            company_name: fields.company_name,
            sector: fields.sector,
            current_price: fields.price,
            previous_price: fields.price,
            market_cap: fields.market_cap,
            volume: fields.volume,
            year_listed: fields.year_listed,
            change_percent: 0.0,
            added_date: chrono::Local::now().naive_local(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────

    pub fn id(&self) -> StockId {
        self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    pub fn previous_price(&self) -> f64 {
        self.previous_price
    }

    pub fn market_cap(&self) -> f64 {
        self.market_cap
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }

    pub fn year_listed(&self) -> i32 {
        self.year_listed
    }

    pub fn change_percent(&self) -> f64 {
        self.change_percent
    }

    pub fn added_date(&self) -> NaiveDateTime {
        self.added_date
    }

    pub fn is_gainer(&self) -> bool {
        self.change_percent > 0.0
    }

    pub fn is_loser(&self) -> bool {
        self.change_percent < 0.0
    }

    /// Canonical key form of this stock's symbol.
    pub fn key(&self) -> String {
        normalize_symbol(&self.symbol)
    }

    // ── Mutation ──────────────────────────────────────────────────────

    /// Move the current price into `previous_price`, store `price`, and
    /// recompute `change_percent` from the pair.
    pub fn set_current_price(&mut self, price: f64) {
        self.previous_price = self.current_price;
        self.current_price = price;
        self.change_percent = percent_change(self.previous_price, self.current_price);
    }

    /// Set `change_percent` without touching either price.
    ///
    /// Only for seed and test data; any later price update recomputes it.
    pub fn override_change_percent(&mut self, change_percent: f64) {
        self.change_percent = change_percent;
    }

    /// Put all three price fields back as a single unit. Used to undo a
    /// recorded price change.
    pub fn restore_prices(&mut self, current: f64, previous: f64, change_percent: f64) {
        self.current_price = current;
        self.previous_price = previous;
        self.change_percent = change_percent;
    }

    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.company_name = name.into();
    }

    pub fn set_sector(&mut self, sector: impl Into<String>) {
        self.sector = sector.into();
    }

    pub fn set_market_cap(&mut self, market_cap: f64) {
        self.market_cap = market_cap;
    }

    pub fn set_volume(&mut self, volume: u64) {
        self.volume = volume;
    }

    pub fn set_year_listed(&mut self, year: i32) {
        self.year_listed = year;
    }
}

impl PartialEq for Stock {
    fn eq(&self, other: &Self) -> bool {
        normalize_symbol(&self.symbol) == normalize_symbol(&other.symbol)
    }
}

impl Eq for Stock {}

impl Hash for Stock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        normalize_symbol(&self.symbol).hash(state);
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (Rs. {:.2})", self.symbol, self.company_name, self.current_price)
    }
}

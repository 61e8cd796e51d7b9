//! `StockRepository`: one insertion-ordered `Vec<Stock>` plus a symbol
//! index into it.
//!
//! Invariants:
//! - every stock in `stocks` has exactly one `index` entry, keyed by its
//!   normalized symbol, holding its position
//! - `index.len() == stocks.len()`
//! - sorting never reorders `stocks`; sorted views are copies

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use super::seed::{sample_stocks, SAMPLE_CHANGE_OVERRIDES};
use super::RepositoryError;
use crate::collections::{BoundedQueue, PriceHistory, RecentlyViewed};
use crate::config::{ConfigError, RepositoryConfig};
use crate::domain::{normalize_symbol, NewStock, PriceChange, Stock, StockId};
use crate::ordering::{SortDirection, SortKey};
use crate::search::{self, StockFilter};
use crate::sort::{sorted_copy, SortAlgorithm};

/// Partial update for an existing stock. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockUpdate {
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume: Option<u64>,
    pub year_listed: Option<i32>,
}

impl StockUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    pub fn volume(mut self, volume: u64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn year_listed(mut self, year: i32) -> Self {
        self.year_listed = Some(year);
        self
    }
}

fn check_amount(field: &str, value: f64) -> Result<(), RepositoryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RepositoryError::InvalidInput(format!(
            "{field} must be a finite non-negative number, got {value}"
        )))
    }
}

#[derive(Debug, Clone)]
pub struct StockRepository {
    stocks: Vec<Stock>,
    index: HashMap<String, usize>,
    recent: BoundedQueue<Stock>,
    viewed: RecentlyViewed,
    history: PriceHistory,
    next_id: StockId,
}

impl Default for StockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StockRepository {
    /// Empty repository with default tracker capacities.
    pub fn new() -> Self {
        Self {
            stocks: Vec::new(),
            index: HashMap::new(),
            recent: BoundedQueue::default(),
            viewed: RecentlyViewed::default(),
            history: PriceHistory::default(),
            next_id: StockId(1),
        }
    }

    /// Repository sized from `config`, seeded when `seed_sample_data` is set.
    pub fn with_config(config: &RepositoryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut repo = Self {
            stocks: Vec::new(),
            index: HashMap::new(),
            recent: BoundedQueue::new(config.recent_capacity)?,
            viewed: RecentlyViewed::new(config.viewed_capacity)?,
            history: PriceHistory::new(config.price_history_capacity)?,
            next_id: StockId(1),
        };
        if config.seed_sample_data {
            repo.load_sample();
        }
        Ok(repo)
    }

    /// Repository holding the bundled NEPSE sample.
    pub fn seeded() -> Self {
        let mut repo = Self::new();
        repo.load_sample();
        repo
    }

    fn load_sample(&mut self) {
        for (i, fields) in sample_stocks().into_iter().enumerate() {
            let added = match self.add(fields) {
                Ok(stock) => stock,
                Err(e) => {
                    warn!(error = %e, "skipping sample stock");
                    continue;
                }
            };
            if let Some(&change) = SAMPLE_CHANGE_OVERRIDES.get(i) {
                if let Some(&pos) = self.index.get(added.symbol()) {
                    self.stocks[pos].override_change_percent(change);
                }
            }
        }
        debug!(count = self.stocks.len(), "loaded sample stocks");
    }

    // ── Writes ────────────────────────────────────────────────────────

    /// Insert a new stock. The symbol is stored normalized.
    pub fn add(&mut self, mut fields: NewStock) -> Result<Stock, RepositoryError> {
        let key = normalize_symbol(&fields.symbol);
        if key.is_empty() {
            warn!("rejected add: blank symbol");
            return Err(RepositoryError::InvalidInput(
                "symbol must not be blank".to_string(),
            ));
        }
        if let Err(e) = check_amount("price", fields.price)
            .and_then(|_| check_amount("market cap", fields.market_cap))
        {
            warn!(symbol = %key, error = %e, "rejected add");
            return Err(e);
        }
        if self.index.contains_key(&key) {
            warn!(symbol = %key, "rejected add: duplicate symbol");
            return Err(RepositoryError::DuplicateKey(key));
        }

        fields.symbol = key.clone();
        let id = self.next_id;
        self.next_id = id.next();
        let stock = Stock::new(id, fields);

        self.index.insert(key, self.stocks.len());
        self.stocks.push(stock.clone());
        if let Some(evicted) = self.recent.enqueue(stock.clone()) {
            trace!(symbol = %evicted.symbol(), "evicted from recently added");
        }
        debug!(symbol = %stock.symbol(), id = %id, price = stock.current_price(), "added stock");
        Ok(stock)
    }

    /// Apply `update` to the stock with `symbol`. Validation happens before
    /// any field changes, so a rejected update leaves the stock untouched.
    pub fn update(&mut self, symbol: &str, update: StockUpdate) -> Result<Stock, RepositoryError> {
        let key = normalize_symbol(symbol);
        let Some(&pos) = self.index.get(&key) else {
            warn!(symbol = %key, "rejected update: not found");
            return Err(RepositoryError::NotFound(key));
        };
        let checks = [("price", update.price), ("market cap", update.market_cap)];
        for (field, value) in checks {
            if let Some(v) = value {
                if let Err(e) = check_amount(field, v) {
                    warn!(symbol = %key, error = %e, "rejected update");
                    return Err(e);
                }
            }
        }

        let stock = &mut self.stocks[pos];
        if let Some(name) = update.company_name {
            stock.set_company_name(name);
        }
        if let Some(sector) = update.sector {
            stock.set_sector(sector);
        }
        if let Some(market_cap) = update.market_cap {
            stock.set_market_cap(market_cap);
        }
        if let Some(volume) = update.volume {
            stock.set_volume(volume);
        }
        if let Some(year) = update.year_listed {
            stock.set_year_listed(year);
        }
        if let Some(price) = update.price {
            let old_price = stock.current_price();
            let change = PriceChange::new(key.clone(), old_price, price)
                .with_prior(stock.previous_price(), stock.change_percent());
            stock.set_current_price(price);
            self.history.push(change);
            debug!(symbol = %key, old_price, new_price = price, "price changed");
        }

        let updated = self.stocks[pos].clone();
        debug!(symbol = %key, id = %updated.id(), "updated stock");
        Ok(updated)
    }

    /// Remove the stock with `symbol`. Recency snapshots are kept.
    pub fn delete(&mut self, symbol: &str) -> Result<Stock, RepositoryError> {
        let key = normalize_symbol(symbol);
        let Some(pos) = self.index.remove(&key) else {
            warn!(symbol = %key, "rejected delete: not found");
            return Err(RepositoryError::NotFound(key));
        };
        let removed = self.stocks.remove(pos);
        for (i, stock) in self.stocks.iter().enumerate().skip(pos) {
            self.index.insert(stock.key(), i);
        }
        debug!(symbol = %key, id = %removed.id(), "deleted stock");
        Ok(removed)
    }

    // ── Reads ─────────────────────────────────────────────────────────

    pub fn get(&self, symbol: &str) -> Option<Stock> {
        self.get_ref(symbol).cloned()
    }

    fn get_ref(&self, symbol: &str) -> Option<&Stock> {
        self.index
            .get(&normalize_symbol(symbol))
            .and_then(|&pos| self.stocks.get(pos))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(&normalize_symbol(symbol))
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Copy of every stock in insertion order.
    pub fn all(&self) -> Vec<Stock> {
        self.stocks.clone()
    }

    /// Distinct sectors in first-seen order.
    pub fn all_sectors(&self) -> Vec<String> {
        let mut sectors: Vec<String> = Vec::new();
        for stock in &self.stocks {
            if !sectors.iter().any(|s| s == stock.sector()) {
                sectors.push(stock.sector().to_string());
            }
        }
        sectors
    }

    pub fn total_market_cap(&self) -> f64 {
        self.stocks.iter().map(Stock::market_cap).sum()
    }

    pub fn sector_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for stock in &self.stocks {
            *counts.entry(stock.sector().to_string()).or_insert(0) += 1;
        }
        counts
    }

    // ── Sorted views ──────────────────────────────────────────────────

    /// Stable sorted copy.
    pub fn sorted(&self, key: SortKey, direction: SortDirection) -> Vec<Stock> {
        self.sorted_with(key, direction, SortAlgorithm::Merge)
    }

    pub fn sorted_with(
        &self,
        key: SortKey,
        direction: SortDirection,
        algorithm: SortAlgorithm,
    ) -> Vec<Stock> {
        sorted_copy(&self.stocks, key, direction, algorithm)
    }

    // ── Searches ──────────────────────────────────────────────────────

    pub fn search_by_name(&self, query: &str) -> Vec<Stock> {
        search::search_by_name(&self.stocks, query).into_iter().cloned().collect()
    }

    pub fn search_by_sector(&self, sector: &str) -> Vec<Stock> {
        search::search_by_sector(&self.stocks, sector).into_iter().cloned().collect()
    }

    pub fn search(&self, filter: &StockFilter) -> Vec<Stock> {
        search::search(&self.stocks, filter).into_iter().cloned().collect()
    }

    /// Stocks priced within `[min, max]`, ascending by price.
    pub fn search_by_price_range(&self, min: f64, max: f64) -> Vec<Stock> {
        search::search_by_price_range(&self.stocks, min, max)
    }

    pub fn top_gainers(&self, limit: usize) -> Vec<Stock> {
        search::find_top_gainers(&self.stocks, limit).into_iter().cloned().collect()
    }

    pub fn top_losers(&self, limit: usize) -> Vec<Stock> {
        search::find_top_losers(&self.stocks, limit).into_iter().cloned().collect()
    }

    /// A stock priced within tolerance of `price`.
    pub fn find_by_price(&self, price: f64) -> Option<Stock> {
        search::find_by_price(&self.stocks, price)
    }

    pub fn find_by_year(&self, year: i32) -> Option<Stock> {
        search::find_by_year(&self.stocks, year)
    }

    // ── Activity ──────────────────────────────────────────────────────

    /// Snapshots of the most recently added stocks, oldest first.
    pub fn recently_added(&self) -> Vec<Stock> {
        self.recent.to_vec()
    }

    /// Look up a stock and record the view.
    pub fn view(&mut self, symbol: &str) -> Option<Stock> {
        let stock = self.get(symbol)?;
        if let Some(evicted) = self.viewed.record(stock.clone()) {
            trace!(symbol = %evicted.symbol(), "evicted from recently viewed");
        }
        Some(stock)
    }

    pub fn recently_viewed(&self) -> Vec<Stock> {
        self.viewed.to_vec()
    }

    pub fn last_price_change(&self) -> Option<PriceChange> {
        self.history.last_change().cloned()
    }

    /// Pop the newest price change and, if the stock still exists, put its
    /// current price, previous price and change percent back to their
    /// pre-update values. The restore is not itself recorded.
    pub fn undo_last_price_change(&mut self) -> Option<PriceChange> {
        let change = self.history.undo_last_change()?;
        match self.index.get(&normalize_symbol(&change.symbol)) {
            Some(&pos) => {
                self.stocks[pos].restore_prices(
                    change.old_price,
                    change.prior_previous_price,
                    change.prior_change_percent,
                );
                debug!(
                    symbol = %change.symbol,
                    old_price = change.new_price,
                    new_price = change.old_price,
                    "reverted price change"
                );
            }
            None => warn!(symbol = %change.symbol, "undo for a deleted stock"),
        }
        Some(change)
    }

    pub fn price_change_count(&self) -> usize {
        self.history.len()
    }
}

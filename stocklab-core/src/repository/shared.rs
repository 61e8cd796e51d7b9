//! Thread-safe handle over a [`StockRepository`].
//!
//! Writes run inside one write-lock critical section; reads take the read
//! lock and hand back owned copies. A poisoned lock is recovered: the public
//! write methods validate before they mutate, and arbitrary mutation under
//! the lock (`with_write`) is crate-private.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{RepositoryError, StockRepository, StockUpdate};
use crate::domain::{NewStock, PriceChange, Stock};
use crate::ordering::{SortDirection, SortKey};
use crate::search::StockFilter;

#[derive(Debug, Clone, Default)]
pub struct SharedRepository {
    inner: Arc<RwLock<StockRepository>>,
}

impl From<StockRepository> for SharedRepository {
    fn from(repo: StockRepository) -> Self {
        Self::new(repo)
    }
}

impl SharedRepository {
    pub fn new(repo: StockRepository) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repo)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StockRepository> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StockRepository> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` against the repository under the read lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&StockRepository) -> R) -> R {
        f(&self.read())
    }

    /// Run `f` against the repository under the write lock.
    pub(crate) fn with_write<R>(&self, f: impl FnOnce(&mut StockRepository) -> R) -> R {
        f(&mut self.write())
    }

    // ── Writes ────────────────────────────────────────────────────────

    pub fn add(&self, fields: NewStock) -> Result<Stock, RepositoryError> {
        self.write().add(fields)
    }

    pub fn update(&self, symbol: &str, update: StockUpdate) -> Result<Stock, RepositoryError> {
        self.write().update(symbol, update)
    }

    pub fn delete(&self, symbol: &str) -> Result<Stock, RepositoryError> {
        self.write().delete(symbol)
    }

    pub fn view(&self, symbol: &str) -> Option<Stock> {
        self.write().view(symbol)
    }

    pub fn undo_last_price_change(&self) -> Option<PriceChange> {
        self.write().undo_last_price_change()
    }

    // ── Reads ─────────────────────────────────────────────────────────

    pub fn get(&self, symbol: &str) -> Option<Stock> {
        self.read().get(symbol)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn all(&self) -> Vec<Stock> {
        self.read().all()
    }

    pub fn all_sectors(&self) -> Vec<String> {
        self.read().all_sectors()
    }

    pub fn sector_counts(&self) -> HashMap<String, usize> {
        self.read().sector_counts()
    }

    pub fn total_market_cap(&self) -> f64 {
        self.read().total_market_cap()
    }

    pub fn sorted(&self, key: SortKey, direction: SortDirection) -> Vec<Stock> {
        self.read().sorted(key, direction)
    }

    pub fn search(&self, filter: &StockFilter) -> Vec<Stock> {
        self.read().search(filter)
    }

    pub fn recently_added(&self) -> Vec<Stock> {
        self.read().recently_added()
    }
}

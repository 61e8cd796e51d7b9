//! Activity trackers built on the bounded containers: recently viewed
//! stocks (queue with move-to-back) and price change history (stack).

use super::{BoundedQueue, BoundedStack, ContainerError};
use crate::domain::{PriceChange, Stock};

pub const DEFAULT_PRICE_HISTORY_CAPACITY: usize = 100;

/// Recently viewed stocks, oldest view at the front. Viewing a stock that is
/// already tracked moves it to the back instead of duplicating it.
#[derive(Debug, Clone)]
pub struct RecentlyViewed {
    queue: BoundedQueue<Stock>,
}

impl RecentlyViewed {
    pub fn new(capacity: usize) -> Result<Self, ContainerError> {
        Ok(Self {
            queue: BoundedQueue::new(capacity)?,
        })
    }

    /// Record a view. Returns the entry evicted to make room, if any.
    pub fn record(&mut self, stock: Stock) -> Option<Stock> {
        self.queue.retain(|s| s != &stock);
        self.queue.enqueue(stock)
    }

    pub fn to_vec(&self) -> Vec<Stock> {
        self.queue.to_vec()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Default for RecentlyViewed {
    fn default() -> Self {
        Self {
            queue: BoundedQueue::default(),
        }
    }
}

/// Newest-first record of price mutations.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    stack: BoundedStack<PriceChange>,
}

impl PriceHistory {
    pub fn new(capacity: usize) -> Result<Self, ContainerError> {
        Ok(Self {
            stack: BoundedStack::new(capacity)?,
        })
    }

    pub fn record(&mut self, symbol: impl Into<String>, old_price: f64, new_price: f64) {
        self.push(PriceChange::new(symbol, old_price, new_price));
    }

    /// Record a prepared change, e.g. one carrying prior derived fields.
    pub fn push(&mut self, change: PriceChange) {
        self.stack.push(change);
    }

    pub fn last_change(&self) -> Option<&PriceChange> {
        self.stack.peek().ok()
    }

    /// Pop the newest record. Does not touch any stock.
    pub fn undo_last_change(&mut self) -> Option<PriceChange> {
        self.stack.pop().ok()
    }

    pub fn has_changes(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Newest first.
    pub fn to_vec(&self) -> Vec<PriceChange> {
        self.stack.to_vec()
    }
}

impl Default for PriceHistory {
    fn default() -> Self {
        Self {
            stack: BoundedStack::with_capacity(DEFAULT_PRICE_HISTORY_CAPACITY),
        }
    }
}

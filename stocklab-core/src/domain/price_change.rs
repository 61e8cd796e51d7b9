//! PriceChange: one recorded price mutation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::stock::percent_change;

/// One price update. `prior_previous_price` and `prior_change_percent` hold
/// the stock's derived fields as they were before the update, so an undo can
/// put the stock back exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub symbol: String,
    pub old_price: f64,
    pub new_price: f64,
    pub prior_previous_price: f64,
    pub prior_change_percent: f64,
    pub recorded_at: NaiveDateTime,
}

impl PriceChange {
    pub fn new(symbol: impl Into<String>, old_price: f64, new_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            old_price,
            new_price,
            prior_previous_price: old_price,
            prior_change_percent: 0.0,
            recorded_at: chrono::Local::now().naive_local(),
        }
    }

    /// Attach the stock's pre-update `previous_price` and `change_percent`.
    pub fn with_prior(mut self, previous_price: f64, change_percent: f64) -> Self {
        self.prior_previous_price = previous_price;
        self.prior_change_percent = change_percent;
        self
    }

    pub fn change_percent(&self) -> f64 {
        percent_change(self.old_price, self.new_price)
    }
}

impl fmt::Display for PriceChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Rs.{:.2} -> Rs.{:.2} ({:.2}%)",
            self.symbol,
            self.old_price,
            self.new_price,
            self.change_percent()
        )
    }
}

//! Display projection of a [`Stock`] for table and JSON output.

use serde::{Deserialize, Serialize};

use super::stock::Stock;

/// Typed, display-ready view of one stock. Owns its strings so it can
/// outlive the repository lock it was read under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRow {
    pub symbol: String,
    pub company_name: String,
    pub sector: String,
    pub price: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: f64,
    pub year_listed: i32,
}

impl From<&Stock> for StockRow {
    fn from(stock: &Stock) -> Self {
        Self {
            symbol: stock.symbol().to_string(),
            company_name: stock.company_name().to_string(),
            sector: stock.sector().to_string(),
            price: stock.current_price(),
            change_percent: stock.change_percent(),
            volume: stock.volume(),
            market_cap: stock.market_cap(),
            year_listed: stock.year_listed(),
        }
    }
}

/// Project a sequence of stocks into rows, preserving order.
pub fn to_rows<'a>(stocks: impl IntoIterator<Item = &'a Stock>) -> Vec<StockRow> {
    stocks.into_iter().map(StockRow::from).collect()
}

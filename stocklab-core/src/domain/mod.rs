//! Domain types for StockLab

pub mod ids;
pub mod price_change;
pub mod row;
pub mod stock;

pub use ids::StockId;
pub use price_change::PriceChange;
pub use row::{to_rows, StockRow};
pub use stock::{normalize_symbol, percent_change, NewStock, Stock};

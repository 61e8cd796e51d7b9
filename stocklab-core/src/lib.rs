//! StockLab Core: stock records, bounded containers, sorting, searching and
//! the in-memory stock repository.
//!
//! This crate contains:
//! - Domain types (stocks, price changes, tabular rows)
//! - Bounded LIFO/FIFO containers with evict-oldest overflow
//! - Comparator vocabulary (sort keys and directions)
//! - Quicksort (Lomuto) and stable mergesort
//! - Binary and linear searches
//! - `StockRepository` with symbol index, recency tracking and price history

pub mod collections;
pub mod config;
pub mod domain;
pub mod ordering;
pub mod repository;
pub mod search;
pub mod sort;

pub use collections::{BoundedQueue, BoundedStack, ContainerError};
pub use config::{ConfigError, RepositoryConfig};
pub use domain::{NewStock, PriceChange, Stock, StockId, StockRow};
pub use ordering::{SortDirection, SortKey};
pub use repository::{RepositoryError, SharedRepository, StockRepository, StockUpdate};
pub use search::StockFilter;
pub use sort::SortAlgorithm;

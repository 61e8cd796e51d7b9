//! Stock repository: the canonical insertion-ordered collection with an
//! O(1) symbol index and the activity trackers that hang off it.
//!
//! - [`StockRepository`]: single owner, `&mut self` for writes
//! - [`SharedRepository`]: `Arc<RwLock<_>>` handle for multi-thread use
//! - [`seed`]: the bundled NEPSE sample

pub mod seed;
pub mod shared;
pub mod store;

pub use seed::{sample_stocks, SAMPLE_CHANGE_OVERRIDES};
pub use shared::SharedRepository;
pub use store::{StockRepository, StockUpdate};

use thiserror::Error;

/// Rejected repository writes. Lookups that find nothing return `None`
/// instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("stock with symbol {0} already exists")]
    DuplicateKey(String),

    #[error("stock with symbol {0} not found")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

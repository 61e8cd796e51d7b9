//! Bounded linear containers.
//!
//! Both containers evict on overflow instead of rejecting: an insert into a
//! full container drops the logically oldest element first and hands it back
//! to the caller. Only reads and removals on an empty container fail.

pub mod history;
pub mod queue;
pub mod stack;

pub use history::{PriceHistory, RecentlyViewed, DEFAULT_PRICE_HISTORY_CAPACITY};
pub use queue::{BoundedQueue, DEFAULT_QUEUE_CAPACITY};
pub use stack::BoundedStack;

use thiserror::Error;

/// Errors from bounded container operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Pop, dequeue or peek on an empty container. Names the container kind.
    #[error("{0} is empty")]
    EmptyContainer(&'static str),

    #[error("capacity must be at least 1")]
    InvalidCapacity,
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository-assigned stock identifier. Assigned once, never reused within a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StockId(pub u32);

impl StockId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u32> for StockId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for StockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

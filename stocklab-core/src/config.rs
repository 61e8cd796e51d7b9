//! Repository configuration, loadable from TOML.
//!
//! ```toml
//! recent_capacity = 5
//! viewed_capacity = 5
//! price_history_capacity = 100
//! seed_sample_data = true
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::collections::{ContainerError, DEFAULT_PRICE_HISTORY_CAPACITY, DEFAULT_QUEUE_CAPACITY};

/// Errors from loading or validating a [`RepositoryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<ContainerError> for ConfigError {
    fn from(e: ContainerError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Length of the recently-added queue.
    pub recent_capacity: usize,
    /// Length of the recently-viewed queue.
    pub viewed_capacity: usize,
    /// Number of price changes kept for inspection/undo.
    pub price_history_capacity: usize,
    /// Load the bundled NEPSE sample on construction.
    pub seed_sample_data: bool,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            recent_capacity: DEFAULT_QUEUE_CAPACITY,
            viewed_capacity: DEFAULT_QUEUE_CAPACITY,
            price_history_capacity: DEFAULT_PRICE_HISTORY_CAPACITY,
            seed_sample_data: true,
        }
    }
}

impl RepositoryConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// All capacities must be at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("recent_capacity", self.recent_capacity),
            ("viewed_capacity", self.viewed_capacity),
            ("price_history_capacity", self.price_history_capacity),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

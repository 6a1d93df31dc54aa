//! Configuration system for the tilepath solver.
//!
//! Load search parameters from TOML files to control the work budget,
//! slice interleaving, and demo shuffling without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use tilepath_config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     slice_size = 5000
//!     work_budget = 200000
//!     shuffle_moves = 80
//!     random_seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.slice_size, 5000);
//! assert_eq!(config.random_seed, Some(7));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use tilepath_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Search configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Expansions one side performs before control returns to the
    /// driver and the other side gets a turn.
    #[serde(default = "default_slice_size")]
    pub slice_size: u64,

    /// Total expansion budget across both sides before the search gives
    /// up.
    #[serde(default = "default_work_budget")]
    pub work_budget: u64,

    /// Random moves applied when shuffling a goal into a start position.
    #[serde(default = "default_shuffle_moves")]
    pub shuffle_moves: u64,

    /// Random seed for reproducible shuffles.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_slice_size() -> u64 {
    10_000
}

fn default_work_budget() -> u64 {
    1_000_000
}

fn default_shuffle_moves() -> u64 {
    60
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            slice_size: default_slice_size(),
            work_budget: default_work_budget(),
            shuffle_moves: default_shuffle_moves(),
            random_seed: None,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, contains invalid
    /// TOML, or fails [`SearchConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values the solver cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slice_size == 0 {
            return Err(ConfigError::Invalid(
                "slice_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

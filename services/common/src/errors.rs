//! Common error types for the statistics services

use thiserror::Error;

/// Result alias used throughout the statistics services
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors raised by generators and aggregators.
///
/// Every variant aborts the whole call; no partial statistics are returned.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Requested generation count is not a positive integer
    #[error("Invalid count: expected a positive number, got {requested}")]
    InvalidCount {
        /// The count that was requested
        requested: usize,
    },

    /// Aggregation requested on an empty profile collection
    #[error("Empty input: cannot aggregate an empty profile collection")]
    EmptyInput,

    /// A profile record is missing one or more required fields
    #[error("Schema error: missing required fields: {}", .missing.join(", "))]
    Schema {
        /// Names of the missing fields, in schema order
        missing: Vec<&'static str>,
    },

    /// Weights of a market aggregation sum to exactly zero
    #[error("Zero weight sum: weights must not sum to zero")]
    ZeroWeightSum,

    /// A company carries a negative (or non-numeric) weight
    #[error("Negative weight: {symbol} has weight {weight}")]
    NegativeWeight {
        /// Symbol of the first offending company
        symbol: String,
        /// The offending weight
        weight: f64,
    },

    /// Generator configuration bounds are inconsistent
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: String,
    },

    /// Configuration document could not be parsed
    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl StatsError {
    /// Shorthand for an [`StatsError::InvalidConfig`] with a formatted reason
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

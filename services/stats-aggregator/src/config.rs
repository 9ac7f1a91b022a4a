//! Generator configuration

use serde::{Deserialize, Serialize};
use services_common::{
    DEFAULT_HIGH_MAX, DEFAULT_MAX_AGE_YEARS, DEFAULT_OPEN_MAX, DEFAULT_OPEN_MIN, StatsError,
    StatsResult,
};

/// Synthetic data generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for reproducible output; `None` draws from OS entropy
    pub seed: Option<u64>,

    /// Oldest age (whole years) a generated profile may have
    pub max_age_years: u32,

    /// Company price bounds
    pub prices: PriceBounds,
}

/// Inclusive price bounds for generated companies, in whole price units.
///
/// `open` is drawn from `[open_min, open_max]`, `high` from
/// `[open, high_max]`, `close` from `[open, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBounds {
    pub open_min: u32,
    pub open_max: u32,
    pub high_max: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_age_years: DEFAULT_MAX_AGE_YEARS,
            prices: PriceBounds::default(),
        }
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            open_min: DEFAULT_OPEN_MIN,
            open_max: DEFAULT_OPEN_MAX,
            high_max: DEFAULT_HIGH_MAX,
        }
    }
}

impl GeneratorConfig {
    /// Configuration with a fixed seed and default bounds
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document; absent keys take their defaults
    pub fn from_json(json: &str) -> StatsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the bounds describe a non-empty sampling range
    pub fn validate(&self) -> StatsResult<()> {
        self.prices.validate()
    }
}

impl PriceBounds {
    /// Check `open_min <= open_max <= high_max`
    pub fn validate(&self) -> StatsResult<()> {
        if self.open_min > self.open_max {
            return Err(StatsError::invalid_config(format!(
                "open_min {} exceeds open_max {}",
                self.open_min, self.open_max
            )));
        }
        if self.open_max > self.high_max {
            return Err(StatsError::invalid_config(format!(
                "open_max {} exceeds high_max {}",
                self.open_max, self.high_max
            )));
        }
        Ok(())
    }
}

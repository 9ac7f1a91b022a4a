//! Synthetic basket constituents

use crate::Company;
use crate::config::{GeneratorConfig, PriceBounds};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use services_common::{SYMBOL_LEN, StatsResult, ensure_positive_count};
use tracing::debug;

/// Generator for synthetic companies.
///
/// Prices are whole units with `open <= close <= high`; weights fall in
/// `[0, 1)`.
#[derive(Debug, Clone)]
pub struct CompanyGenerator {
    rng: StdRng,
    prices: PriceBounds,
}

impl CompanyGenerator {
    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            prices: PriceBounds::default(),
        }
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Generator built from a validated configuration
    pub fn from_config(config: &GeneratorConfig) -> StatsResult<Self> {
        config.validate()?;
        let generator = match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        };
        Ok(Self {
            prices: config.prices,
            ..generator
        })
    }

    /// Generate `count` companies
    pub fn generate(&mut self, count: usize) -> StatsResult<Vec<Company>> {
        ensure_positive_count(count)?;

        let companies: Vec<Company> = (0..count).map(|_| self.next_company()).collect();

        debug!("Generated {} companies", count);
        Ok(companies)
    }

    fn next_company(&mut self) -> Company {
        let company_name: String = CompanyName().fake_with_rng(&mut self.rng);
        let symbol: String = (0..SYMBOL_LEN)
            .map(|_| char::from(self.rng.gen_range(b'A'..=b'Z')))
            .collect();

        let open = self.rng.gen_range(self.prices.open_min..=self.prices.open_max);
        let high = self.rng.gen_range(open..=self.prices.high_max);
        let close = self.rng.gen_range(open..=high);
        let weight: f64 = self.rng.r#gen();

        Company::new(
            company_name,
            symbol,
            f64::from(open),
            f64::from(high),
            f64::from(close),
            weight,
        )
    }
}

//! Weighted market statistics aggregator

use crate::{Company, MarketStatistics, StatisticsAggregator};
use services_common::{
    StatsResult, ensure_non_negative_weight, ensure_non_zero_weight_sum, is_valid_weight,
};
use tracing::debug;

/// Partial weighted sums over companies.
///
/// The first invalid weight is remembered rather than rejected on push, so
/// that a zero weight sum is reported in preference to it.
#[derive(Debug, Clone, Default)]
pub struct MarketAccumulator {
    count: usize,
    weight_sum: f64,
    open_sum: f64,
    high_sum: f64,
    close_sum: f64,
    first_invalid: Option<(String, f64)>,
}

impl MarketAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Companies seen so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sum of weights seen so far
    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    /// Add one company
    pub fn push(&mut self, company: &Company) {
        let w = company.weight;

        self.count += 1;
        self.weight_sum += w;
        self.open_sum += company.open * w;
        self.high_sum += company.high * w;
        self.close_sum += company.close * w;

        if self.first_invalid.is_none() && !is_valid_weight(w) {
            self.first_invalid = Some((company.symbol.clone(), w));
        }
    }

    /// Fold the state of a later chunk into this one
    pub fn merge(&mut self, other: MarketAccumulator) {
        self.count += other.count;
        self.weight_sum += other.weight_sum;
        self.open_sum += other.open_sum;
        self.high_sum += other.high_sum;
        self.close_sum += other.close_sum;
        if self.first_invalid.is_none() {
            self.first_invalid = other.first_invalid;
        }
    }

    /// Produce the weighted means.
    ///
    /// Zero weight sum is checked first, then negative weights.
    pub fn finish(self) -> StatsResult<MarketStatistics> {
        let weight_sum = ensure_non_zero_weight_sum(self.weight_sum)?;
        if let Some((symbol, weight)) = &self.first_invalid {
            ensure_non_negative_weight(symbol, *weight)?;
        }

        Ok(MarketStatistics {
            stock_mkt_open: self.open_sum / weight_sum,
            stock_mkt_high: self.high_sum / weight_sum,
            stock_mkt_close: self.close_sum / weight_sum,
        })
    }
}

impl<'a> Extend<&'a Company> for MarketAccumulator {
    fn extend<I: IntoIterator<Item = &'a Company>>(&mut self, iter: I) {
        for company in iter {
            self.push(company);
        }
    }
}

/// Weighted mean of open, high and close across `companies`
pub fn aggregate_market(companies: &[Company]) -> StatsResult<MarketStatistics> {
    let mut acc = MarketAccumulator::new();
    acc.extend(companies);
    let weight_sum = acc.weight_sum();
    let stats = acc.finish()?;

    debug!(
        "Aggregated {} companies (weight sum {:.4}): open {:.4} high {:.4} close {:.4}",
        companies.len(),
        weight_sum,
        stats.stock_mkt_open,
        stats.stock_mkt_high,
        stats.stock_mkt_close
    );
    Ok(stats)
}

/// Market aggregator
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketAggregator;

impl MarketAggregator {
    /// Create a new market aggregator
    pub const fn new() -> Self {
        Self
    }
}

impl StatisticsAggregator for MarketAggregator {
    type Input = Company;
    type Output = MarketStatistics;

    fn aggregate(&self, input: &[Company]) -> StatsResult<MarketStatistics> {
        aggregate_market(input)
    }
}

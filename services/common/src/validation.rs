//! Precondition checks shared by the generators and aggregators

use crate::errors::{StatsError, StatsResult};
use tracing::warn;

/// Reject a generation request for zero items
pub fn ensure_positive_count(count: usize) -> StatsResult<usize> {
    if count == 0 {
        warn!("Rejected generation request for {} items", count);
        return Err(StatsError::InvalidCount { requested: count });
    }
    Ok(count)
}

/// Reject an empty aggregation input
pub fn ensure_non_empty<T>(items: &[T]) -> StatsResult<()> {
    if items.is_empty() {
        warn!("Rejected aggregation over an empty collection");
        return Err(StatsError::EmptyInput);
    }
    Ok(())
}

/// Names of the absent fields among `(field name, present)` pairs, in order
pub fn missing_fields(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

/// Check a set of `(field name, present)` pairs.
///
/// Fails with [`StatsError::Schema`] listing every absent field in the order
/// given.
pub fn ensure_fields_present(fields: &[(&'static str, bool)]) -> StatsResult<()> {
    let missing = missing_fields(fields);

    if missing.is_empty() {
        Ok(())
    } else {
        warn!("Rejected record missing fields: {:?}", missing);
        Err(StatsError::Schema { missing })
    }
}

/// Weights must be non-negative numbers; NaN fails this check too
#[inline]
#[must_use]
pub fn is_valid_weight(weight: f64) -> bool {
    weight >= 0.0
}

/// Reject a weight sum that is exactly zero
pub fn ensure_non_zero_weight_sum(sum: f64) -> StatsResult<f64> {
    if sum == 0.0 {
        warn!("Rejected market aggregation with zero weight sum");
        return Err(StatsError::ZeroWeightSum);
    }
    Ok(sum)
}

/// Reject a single negative weight
pub fn ensure_non_negative_weight(symbol: &str, weight: f64) -> StatsResult<f64> {
    if is_valid_weight(weight) {
        Ok(weight)
    } else {
        warn!("Rejected negative weight {} for {}", weight, symbol);
        Err(StatsError::NegativeWeight {
            symbol: symbol.to_string(),
            weight,
        })
    }
}

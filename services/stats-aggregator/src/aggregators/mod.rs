//! Aggregator implementations

pub mod market;
pub mod profile;
pub mod tally;

pub use market::{MarketAccumulator, MarketAggregator, aggregate_market};
pub use profile::{
    ProfileAccumulator, ProfileAggregator, aggregate_profile_records, aggregate_profiles,
    aggregate_profiles_at,
};
pub use tally::Tally;

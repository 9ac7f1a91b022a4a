//! Profile statistics aggregator

use crate::aggregators::tally::Tally;
use crate::{BloodGroup, Profile, ProfileRecord, ProfileStatistics, StatisticsAggregator};
use chrono::{NaiveDate, Utc};
use services_common::{StatsError, StatsResult, ensure_non_empty};
use tracing::debug;

/// Partial state of one pass over profiles.
///
/// Ages are computed against the accumulator's evaluation date at push time.
/// Accumulators over disjoint chunks combine with [`ProfileAccumulator::merge`].
#[derive(Debug, Clone)]
pub struct ProfileAccumulator {
    as_of: NaiveDate,
    count: usize,
    lat_sum: f64,
    long_sum: f64,
    age_sum: f64,
    oldest_age: f64,
    blood_groups: Tally<BloodGroup>,
}

impl ProfileAccumulator {
    /// Create an empty accumulator evaluating ages at `as_of`
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            count: 0,
            lat_sum: 0.0,
            long_sum: 0.0,
            age_sum: 0.0,
            oldest_age: f64::NEG_INFINITY,
            blood_groups: Tally::new(),
        }
    }

    /// Profiles seen so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Add one profile
    pub fn push(&mut self, profile: &Profile) {
        let age = profile.age_at(self.as_of);

        self.count += 1;
        self.lat_sum += profile.current_location.lat();
        self.long_sum += profile.current_location.long();
        self.age_sum += age;
        self.oldest_age = self.oldest_age.max(age);
        self.blood_groups.add(profile.blood_group);
    }

    /// Fold the state of a later chunk into this one
    pub fn merge(&mut self, other: ProfileAccumulator) {
        self.count += other.count;
        self.lat_sum += other.lat_sum;
        self.long_sum += other.long_sum;
        self.age_sum += other.age_sum;
        self.oldest_age = self.oldest_age.max(other.oldest_age);
        self.blood_groups.merge(other.blood_groups);
    }

    /// Produce the statistics; fails on an empty accumulator
    pub fn finish(self) -> StatsResult<ProfileStatistics> {
        let Some((&largest_blood_group, _)) = self.blood_groups.most_common() else {
            return Err(StatsError::EmptyInput);
        };
        let n = self.count as f64;

        Ok(ProfileStatistics {
            largest_blood_group,
            mean_lat: self.lat_sum / n,
            mean_long: self.long_sum / n,
            oldest_age: self.oldest_age,
            avg_age: self.age_sum / n,
        })
    }
}

impl<'a> Extend<&'a Profile> for ProfileAccumulator {
    fn extend<I: IntoIterator<Item = &'a Profile>>(&mut self, iter: I) {
        for profile in iter {
            self.push(profile);
        }
    }
}

/// Aggregate profiles with ages evaluated at `as_of`
pub fn aggregate_profiles_at(profiles: &[Profile], as_of: NaiveDate) -> StatsResult<ProfileStatistics> {
    ensure_non_empty(profiles)?;

    let mut acc = ProfileAccumulator::new(as_of);
    acc.extend(profiles);
    let stats = acc.finish()?;

    debug!(
        "Aggregated {} profiles at {}: mode {} oldest {:.2} avg {:.2}",
        profiles.len(),
        as_of,
        stats.largest_blood_group,
        stats.oldest_age,
        stats.avg_age
    );
    Ok(stats)
}

/// Aggregate profiles with ages evaluated at today's UTC date
pub fn aggregate_profiles(profiles: &[Profile]) -> StatsResult<ProfileStatistics> {
    aggregate_profiles_at(profiles, Utc::now().date_naive())
}

/// Validate loosely keyed records, then aggregate them at `as_of`.
///
/// Emptiness is checked before the schema; the first incomplete record fails
/// the whole call.
pub fn aggregate_profile_records(
    records: &[ProfileRecord],
    as_of: NaiveDate,
) -> StatsResult<ProfileStatistics> {
    ensure_non_empty(records)?;

    let profiles = records
        .iter()
        .map(Profile::try_from)
        .collect::<StatsResult<Vec<_>>>()?;

    aggregate_profiles_at(&profiles, as_of)
}

/// Profile aggregator with an optional fixed evaluation date
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileAggregator {
    as_of: Option<NaiveDate>,
}

impl ProfileAggregator {
    /// Aggregator evaluating ages at the wall-clock date of each call
    pub const fn new() -> Self {
        Self { as_of: None }
    }

    /// Aggregator evaluating ages at a fixed date
    pub const fn at(as_of: NaiveDate) -> Self {
        Self { as_of: Some(as_of) }
    }

    fn evaluation_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl StatisticsAggregator for ProfileAggregator {
    type Input = Profile;
    type Output = ProfileStatistics;

    fn aggregate(&self, input: &[Profile]) -> StatsResult<ProfileStatistics> {
        aggregate_profiles_at(input, self.evaluation_date())
    }
}

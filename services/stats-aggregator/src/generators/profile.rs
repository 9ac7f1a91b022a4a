//! Synthetic demographic profiles

use crate::config::GeneratorConfig;
use crate::{BloodGroup, GeoLocation, Profile, ProfileField, ProfileRecord};
use chrono::{Duration, Months, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use services_common::{
    DEFAULT_MAX_AGE_YEARS, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, StatsResult,
    ensure_positive_count,
};
use tracing::debug;

/// Generator for synthetic profiles.
///
/// Not meant to be shared across threads without external locking; every
/// draw advances the owned RNG.
#[derive(Debug, Clone)]
pub struct ProfileGenerator {
    rng: StdRng,
    max_age_years: u32,
    /// Date birthdates are drawn back from; today when unset
    reference_date: Option<NaiveDate>,
}

impl ProfileGenerator {
    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            max_age_years: DEFAULT_MAX_AGE_YEARS,
            reference_date: None,
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
        Ok(generator.with_max_age(config.max_age_years))
    }

    /// Oldest age, in whole years, a generated profile may have
    pub fn with_max_age(mut self, years: u32) -> Self {
        self.max_age_years = years;
        self
    }

    /// Fix the date birthdates are drawn back from
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Generate `count` complete profiles
    pub fn generate(&mut self, count: usize) -> StatsResult<Vec<Profile>> {
        ensure_positive_count(count)?;

        let today = self.reference_date.unwrap_or_else(|| Utc::now().date_naive());
        let profiles: Vec<Profile> = (0..count).map(|_| self.next_profile(today)).collect();

        debug!("Generated {} profiles relative to {}", count, today);
        Ok(profiles)
    }

    /// Generate `count` records carrying only `fields`.
    ///
    /// An empty field list means every field.
    pub fn generate_records(
        &mut self,
        count: usize,
        fields: &[ProfileField],
    ) -> StatsResult<Vec<ProfileRecord>> {
        let keep = |field: ProfileField| fields.is_empty() || fields.contains(&field);

        let records = self
            .generate(count)?
            .into_iter()
            .map(|profile| ProfileRecord {
                blood_group: keep(ProfileField::BloodGroup).then_some(profile.blood_group),
                current_location: keep(ProfileField::CurrentLocation)
                    .then_some(profile.current_location),
                birthdate: keep(ProfileField::Birthdate).then_some(profile.birthdate),
            })
            .collect();
        Ok(records)
    }

    fn next_profile(&mut self, today: NaiveDate) -> Profile {
        let blood_group = BloodGroup::ALL[self.rng.gen_range(0..BloodGroup::ALL.len())];
        let location = GeoLocation::new(
            self.rng.gen_range(MIN_LATITUDE..=MAX_LATITUDE),
            self.rng.gen_range(MIN_LONGITUDE..=MAX_LONGITUDE),
        );

        let earliest = today
            .checked_sub_months(Months::new(self.max_age_years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN);
        let span_days = (today - earliest).num_days();
        let birthdate = today - Duration::days(self.rng.gen_range(0..=span_days));

        Profile::new(blood_group, location, birthdate)
    }
}

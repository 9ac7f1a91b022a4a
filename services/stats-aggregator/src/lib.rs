//! Statistics Aggregator Service
//!
//! Generates synthetic datasets and reduces them to descriptive statistics:
//! - Demographic profiles: blood group mode, mean location, oldest and average age
//! - Weighted security baskets: weighted open, high and close

pub mod aggregators;
pub mod config;
pub mod generators;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use services_common::{StatsResult, ensure_fields_present, ensure_positive_count, missing_fields};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

pub use aggregators::{
    MarketAccumulator, MarketAggregator, ProfileAccumulator, ProfileAggregator, Tally,
    aggregate_market, aggregate_profile_records, aggregate_profiles, aggregate_profiles_at,
};
pub use config::{GeneratorConfig, PriceBounds};
pub use generators::{CompanyGenerator, ProfileGenerator};
pub use services_common::StatsError;

/// ABO blood group with Rh factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodGroup {
    /// Every blood group, in label order
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
    ];

    /// Conventional label, e.g. `"AB+"`
    pub fn label(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label did not name a known blood group
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown blood group: {0}")]
pub struct ParseBloodGroupError(pub String);

impl FromStr for BloodGroup {
    type Err = ParseBloodGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .into_iter()
            .find(|group| group.label() == s)
            .ok_or_else(|| ParseBloodGroupError(s.to_string()))
    }
}

/// Latitude/longitude pair, serialized as `[lat, long]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation(pub f64, pub f64);

impl GeoLocation {
    /// Create location from latitude and longitude
    pub fn new(lat: f64, long: f64) -> Self {
        Self(lat, long)
    }

    /// Latitude in degrees
    pub fn lat(&self) -> f64 {
        self.0
    }

    /// Longitude in degrees
    pub fn long(&self) -> f64 {
        self.1
    }
}

/// Required profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    BloodGroup,
    CurrentLocation,
    Birthdate,
}

impl ProfileField {
    /// Every required field, in schema order
    pub const ALL: [ProfileField; 3] = [
        ProfileField::BloodGroup,
        ProfileField::CurrentLocation,
        ProfileField::Birthdate,
    ];

    /// Key under which the field appears in a record
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::BloodGroup => "blood_group",
            ProfileField::CurrentLocation => "current_location",
            ProfileField::Birthdate => "birthdate",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One synthetic individual
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Blood group
    pub blood_group: BloodGroup,
    /// Current location
    pub current_location: GeoLocation,
    /// Date of birth
    pub birthdate: NaiveDate,
}

impl Profile {
    /// Create new profile
    pub fn new(blood_group: BloodGroup, current_location: GeoLocation, birthdate: NaiveDate) -> Self {
        Self {
            blood_group,
            current_location,
            birthdate,
        }
    }

    /// Age in fixed 365-day years at `as_of`
    ///
    /// Leap days are not accounted for, so the value drifts slowly from the
    /// calendar age. Fractional years are kept.
    pub fn age_at(&self, as_of: NaiveDate) -> f64 {
        (as_of - self.birthdate).num_days() as f64 / services_common::DAYS_PER_YEAR
    }
}

/// Loosely keyed profile record, e.g. deserialized from a JSON object.
///
/// Absent keys become `None`; conversion into [`Profile`] rejects them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
}

impl ProfileRecord {
    /// Set blood group
    pub fn with_blood_group(mut self, blood_group: BloodGroup) -> Self {
        self.blood_group = Some(blood_group);
        self
    }

    /// Set current location
    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.current_location = Some(location);
        self
    }

    /// Set birthdate
    pub fn with_birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    /// Whether the record carries `field`
    pub fn has(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::BloodGroup => self.blood_group.is_some(),
            ProfileField::CurrentLocation => self.current_location.is_some(),
            ProfileField::Birthdate => self.birthdate.is_some(),
        }
    }
}

impl From<Profile> for ProfileRecord {
    fn from(profile: Profile) -> Self {
        Self {
            blood_group: Some(profile.blood_group),
            current_location: Some(profile.current_location),
            birthdate: Some(profile.birthdate),
        }
    }
}

impl TryFrom<&ProfileRecord> for Profile {
    type Error = StatsError;

    fn try_from(record: &ProfileRecord) -> StatsResult<Self> {
        let presence = ProfileField::ALL.map(|field| (field.name(), record.has(field)));
        ensure_fields_present(&presence)?;

        match (record.blood_group, record.current_location, record.birthdate) {
            (Some(blood_group), Some(current_location), Some(birthdate)) => {
                Ok(Profile::new(blood_group, current_location, birthdate))
            }
            _ => Err(StatsError::Schema {
                missing: missing_fields(&presence),
            }),
        }
    }
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = StatsError;

    fn try_from(record: ProfileRecord) -> StatsResult<Self> {
        Profile::try_from(&record)
    }
}

/// One synthetic security in a weighted basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Company name
    pub company_name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Close price
    pub close: f64,
    /// Contribution weight
    pub weight: f64,
}

impl Company {
    /// Create new company
    pub fn new(
        company_name: impl Into<String>,
        symbol: impl Into<String>,
        open: f64,
        high: f64,
        close: f64,
        weight: f64,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            symbol: symbol.into(),
            open,
            high,
            close,
            weight,
        }
    }
}

/// Summary of a profile collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileStatistics {
    /// Most frequent blood group, first seen wins ties
    pub largest_blood_group: BloodGroup,
    /// Mean latitude
    pub mean_lat: f64,
    /// Mean longitude
    pub mean_long: f64,
    /// Maximum age in years
    pub oldest_age: f64,
    /// Mean age in years
    pub avg_age: f64,
}

/// Weighted summary of a company basket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketStatistics {
    /// Weighted mean open
    pub stock_mkt_open: f64,
    /// Weighted mean high
    pub stock_mkt_high: f64,
    /// Weighted mean close
    pub stock_mkt_close: f64,
}

/// Reduces a slice of records into a statistics record
pub trait StatisticsAggregator {
    /// Record type consumed
    type Input;
    /// Statistics produced
    type Output;

    /// Validate `input` and compute its statistics
    fn aggregate(&self, input: &[Self::Input]) -> StatsResult<Self::Output>;
}

/// Generate `count` profiles and aggregate them at today's date
pub fn calculate_profile_statistics(
    count: usize,
    config: &GeneratorConfig,
) -> StatsResult<ProfileStatistics> {
    ensure_positive_count(count)?;
    let profiles = ProfileGenerator::from_config(config)?.generate(count)?;
    let stats = aggregate_profiles_at(&profiles, Utc::now().date_naive())?;
    info!(
        "Profile statistics over {} profiles: mode {} mean ({:.4}, {:.4})",
        count, stats.largest_blood_group, stats.mean_lat, stats.mean_long
    );
    Ok(stats)
}

/// Generate `count` companies and aggregate the weighted market
pub fn calculate_stock_market_statistics(
    count: usize,
    config: &GeneratorConfig,
) -> StatsResult<MarketStatistics> {
    ensure_positive_count(count)?;
    let companies = CompanyGenerator::from_config(config)?.generate(count)?;
    let stats = aggregate_market(&companies)?;
    info!(
        "Market statistics over {} companies: open {:.4} high {:.4} close {:.4}",
        count, stats.stock_mkt_open, stats.stock_mkt_high, stats.stock_mkt_close
    );
    Ok(stats)
}

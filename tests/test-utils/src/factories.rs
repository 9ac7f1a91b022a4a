//! Factory patterns for building test records

use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use stats_aggregator::{BloodGroup, Company, GeoLocation, Profile};

/// Factory for hand-built profiles relative to an evaluation date
pub struct ProfileFactory {
    as_of: NaiveDate,
    blood_group: BloodGroup,
    location: GeoLocation,
}

impl ProfileFactory {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            blood_group: BloodGroup::OPositive,
            location: GeoLocation::new(0.0, 0.0),
        }
    }

    pub fn with_blood_group(mut self, blood_group: BloodGroup) -> Self {
        self.blood_group = blood_group;
        self
    }

    pub fn with_location(mut self, lat: f64, long: f64) -> Self {
        self.location = GeoLocation::new(lat, long);
        self
    }

    /// Profile born `days` days before the evaluation date
    pub fn aged_days(&self, days: i64) -> Profile {
        Profile::new(self.blood_group, self.location, self.as_of - Duration::days(days))
    }

    /// Profile whose 365-day-year age is exactly `years`
    pub fn aged_years(&self, years: i64) -> Profile {
        self.aged_days(years * 365)
    }

    /// One profile per blood group, in the given order, all the same age
    pub fn build_groups(&self, groups: &[BloodGroup], age_days: i64) -> Vec<Profile> {
        groups
            .iter()
            .map(|&group| Profile::new(group, self.location, self.as_of - Duration::days(age_days)))
            .collect()
    }
}

/// Factory for basket constituents
pub struct CompanyFactory {
    default_symbol: String,
    default_weight: f64,
}

impl CompanyFactory {
    pub fn new() -> Self {
        Self {
            default_symbol: "TST".to_string(),
            default_weight: 1.0,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.default_symbol = symbol.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Company with the given prices and the factory's weight
    pub fn build(&self, open: f64, high: f64, close: f64) -> Company {
        self.build_weighted(open, high, close, self.default_weight)
    }

    /// Company with the given prices and weight
    pub fn build_weighted(&self, open: f64, high: f64, close: f64, weight: f64) -> Company {
        let name: String = CompanyName().fake();
        Company::new(name, self.default_symbol.clone(), open, high, close, weight)
    }

    /// Companies with fixed prices and the given weights
    pub fn build_with_weights(&self, weights: &[f64]) -> Vec<Company> {
        weights
            .iter()
            .map(|&w| self.build_weighted(150.0, 200.0, 180.0, w))
            .collect()
    }
}

impl Default for CompanyFactory {
    fn default() -> Self {
        Self::new()
    }
}

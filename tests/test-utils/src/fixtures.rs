//! Test fixtures for common test data

use crate::factories::{CompanyFactory, ProfileFactory};
use crate::helpers::ymd;
use chrono::NaiveDate;
use rstest::*;
use stats_aggregator::{BloodGroup, Company, GeneratorConfig, Profile};

/// Seed shared by reproducible generator tests
pub const TEST_SEED: u64 = 121;

/// Fixed evaluation date for age computations
#[fixture]
pub fn evaluation_date() -> NaiveDate {
    ymd(2024, 1, 1)
}

/// Generator configuration with [`TEST_SEED`]
#[fixture]
pub fn seeded_config() -> GeneratorConfig {
    GeneratorConfig::seeded(TEST_SEED)
}

/// Two equally weighted companies; weighted means are 135 / 185 / 160
#[fixture]
pub fn two_company_basket() -> Vec<Company> {
    vec![
        CompanyFactory::new().with_symbol("ACM").with_weight(0.5).build(150.0, 200.0, 180.0),
        CompanyFactory::new().with_symbol("GLX").with_weight(0.5).build(120.0, 170.0, 140.0),
    ]
}

/// Four profiles: two O-, one A+, one B+, aged 10, 20, 30 and 40 years
#[fixture]
pub fn small_population(evaluation_date: NaiveDate) -> Vec<Profile> {
    let person = |group, lat, long| {
        ProfileFactory::new(evaluation_date)
            .with_blood_group(group)
            .with_location(lat, long)
    };
    vec![
        person(BloodGroup::APositive, 10.0, 20.0).aged_years(10),
        person(BloodGroup::ONegative, -20.0, 40.0).aged_years(20),
        person(BloodGroup::BPositive, 30.0, -60.0).aged_years(30),
        person(BloodGroup::ONegative, 60.0, 120.0).aged_years(40),
    ]
}

//! Loosely keyed profile records and schema validation

use chrono::NaiveDate;
use rstest::*;
use services_common::ensure_fields_present;
use stats_aggregator::{
    BloodGroup, GeoLocation, Profile, ProfileField, ProfileRecord, StatsError,
    aggregate_profile_records, aggregate_profiles_at,
};
use test_utils::*;

fn complete_record() -> ProfileRecord {
    ProfileRecord::default()
        .with_blood_group(BloodGroup::APositive)
        .with_location(GeoLocation::new(12.5, -7.25))
        .with_birthdate(ymd(1990, 5, 17))
}

#[rstest]
#[case::no_birthdate(ProfileRecord { birthdate: None, ..complete_record() }, vec!["birthdate"])]
#[case::no_location(ProfileRecord { current_location: None, ..complete_record() }, vec!["current_location"])]
#[case::no_group_no_birthdate(
    ProfileRecord { blood_group: None, birthdate: None, ..complete_record() },
    vec!["blood_group", "birthdate"]
)]
#[case::nothing(ProfileRecord::default(), vec!["blood_group", "current_location", "birthdate"])]
fn test_missing_fields_named(#[case] record: ProfileRecord, #[case] expected: Vec<&'static str>) {
    match Profile::try_from(&record) {
        Err(StatsError::Schema { missing }) => assert_eq!(missing, expected),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[rstest]
fn test_schema_error_message_lists_fields() {
    let err = Profile::try_from(ProfileRecord::default()).unwrap_err();
    assert_error_contains(&err, "blood_group, current_location, birthdate");
}

#[rstest]
fn test_conversion_matches_shared_field_check() {
    let record = ProfileRecord {
        current_location: None,
        ..complete_record()
    };
    let from_record = Profile::try_from(&record).unwrap_err();
    let from_check = ensure_fields_present(&[
        ("blood_group", true),
        ("current_location", false),
        ("birthdate", true),
    ])
    .unwrap_err();

    assert_eq!(from_record.to_string(), from_check.to_string());
}

#[rstest]
fn test_one_incomplete_record_fails_collection(evaluation_date: NaiveDate) {
    let records = vec![
        complete_record(),
        ProfileRecord {
            birthdate: None,
            ..complete_record()
        },
        complete_record(),
    ];
    assert_err_matches!(
        aggregate_profile_records(&records, evaluation_date),
        StatsError::Schema { .. }
    );
}

#[rstest]
fn test_empty_records_checked_before_schema(evaluation_date: NaiveDate) {
    assert_err_matches!(
        aggregate_profile_records(&[], evaluation_date),
        StatsError::EmptyInput
    );
}

#[rstest]
fn test_complete_records_match_profiles(small_population: Vec<Profile>, evaluation_date: NaiveDate) {
    let records: Vec<ProfileRecord> = small_population.iter().copied().map(ProfileRecord::from).collect();

    assert_eq!(
        aggregate_profile_records(&records, evaluation_date).unwrap(),
        aggregate_profiles_at(&small_population, evaluation_date).unwrap()
    );
}

#[rstest]
fn test_records_from_json(evaluation_date: NaiveDate) {
    let json = r#"[
        {"blood_group": "B+", "current_location": [10.0, 20.0], "birthdate": "2004-01-01"},
        {"blood_group": "B+", "current_location": [30.0, 40.0], "birthdate": "2014-01-01"}
    ]"#;
    let records: Vec<ProfileRecord> = serde_json::from_str(json).unwrap();

    let stats = aggregate_profile_records(&records, evaluation_date).unwrap();
    assert_eq!(stats.largest_blood_group, BloodGroup::BPositive);
    assert_eq!(stats.mean_lat, 20.0);
    assert_eq!(stats.mean_long, 30.0);
}

#[rstest]
fn test_json_record_without_birthdate_rejected(evaluation_date: NaiveDate) {
    let records: Vec<ProfileRecord> =
        serde_json::from_str(r#"[{"blood_group": "O-", "current_location": [0.0, 0.0]}]"#).unwrap();
    assert!(!records[0].has(ProfileField::Birthdate));

    let err = aggregate_profile_records(&records, evaluation_date).unwrap_err();
    assert_error_contains(&err, "birthdate");
}

#[rstest]
fn test_unknown_blood_group_fails_deserialization() {
    let parsed: Result<ProfileRecord, _> = serde_json::from_str(r#"{"blood_group": "C+"}"#);
    assert!(parsed.is_err());
}

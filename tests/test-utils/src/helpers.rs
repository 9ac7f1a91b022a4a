//! Test helper functions and utilities

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

/// Initialize test logging with environment-based configuration.
///
/// Uses `RUST_LOG` for the level and writes through the test harness.
/// Safe to call multiple times - subsequent calls are ignored.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a date, panicking on an impossible calendar day
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// Split `items` into `parts` consecutive chunks of near-equal length
pub fn split_chunks<T>(items: &[T], parts: usize) -> Vec<&[T]> {
    let parts = parts.max(1);
    let size = items.len().div_ceil(parts).max(1);
    items.chunks(size).collect()
}

//! Common constants used across all services
//!
//! Single source of truth for the magic numbers shared by generators and
//! aggregators.

// Age constants
/// Length of the fixed year used for age computation (leap days ignored)
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Oldest synthetic individual a profile generator produces by default
pub const DEFAULT_MAX_AGE_YEARS: u32 = 115;

// Geolocation bounds
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// Market generation bounds (inclusive, whole price units)
pub const DEFAULT_OPEN_MIN: u32 = 100;
pub const DEFAULT_OPEN_MAX: u32 = 200;
pub const DEFAULT_HIGH_MAX: u32 = 230;

/// Number of letters in a generated ticker symbol
pub const SYMBOL_LEN: usize = 3;

//! Seeded synthetic data generators
//!
//! Each generator owns its random source. Seeds are passed explicitly so
//! concurrent test runs never share generator state.

pub mod company;
pub mod profile;

pub use company::CompanyGenerator;
pub use profile::ProfileGenerator;

//! Shared kernel for the statistics services
//!
//! Holds the error taxonomy, the validation helpers every aggregator runs
//! before touching its input, and the numeric constants the generators and
//! aggregators agree on.

pub mod constants;
pub mod errors;
pub mod validation;

pub use constants::*;
pub use errors::*;
pub use validation::*;

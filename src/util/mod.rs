//! Shared utility helpers.

pub mod error;
pub(crate) mod math;

pub use error::{DriftError, DriftResult};
pub use math::{sweep_len, validate_increment, MIN_INCREMENT};

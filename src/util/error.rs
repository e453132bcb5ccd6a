//! Error types for angledrift.

use thiserror::Error;

/// Result alias for angledrift operations.
pub type DriftResult<T> = std::result::Result<T, DriftError>;

/// Errors that can occur while sweeping and measuring.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DriftError {
    /// The angular step is not a usable positive, finite value.
    #[error("invalid increment {increment}: must be finite and at least {min}")]
    InvalidIncrement {
        /// The rejected increment in radians.
        increment: f64,
        /// Smallest increment accepted by a sweep.
        min: f64,
    },
    /// A zero-length or non-finite vector reached the dot recovery.
    #[error("degenerate vector ({x}, {y}): angle is undefined")]
    DegenerateVector {
        /// X component of the rejected vector.
        x: f64,
        /// Y component of the rejected vector.
        y: f64,
    },
}

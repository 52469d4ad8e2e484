//! Errors returned by the scheduling algorithms.

use thiserror::Error;

/// Errors that can occur while planning groups, schedules or brackets.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SchedulingError {
    /// The requested shape cannot be built (e.g. groups too small to subdivide).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed sizes, participant counts, cut or group size.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A logic defect: something that cannot happen for valid input did.
    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

//! Domain error types for the kinematics formulas.
//!
//! Every variant is an invalid-input condition: a formula was handed a value
//! outside its precondition. Parsing failures and cancelled prompts are not
//! represented here; they belong to the interactive layer in `kin-cli`.

use thiserror::Error;

/// A formula precondition was violated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    /// Final velocity accepts a zero interval but not a negative one.
    #[error("time must be zero or positive (got {time} s)")]
    NegativeTime { time: f64 },

    /// Initial velocity and acceleration need a strictly positive interval.
    #[error("time must be greater than zero (got {time} s)")]
    NonPositiveTime { time: f64 },

    /// Solving for time divides by the acceleration.
    #[error("acceleration cannot be zero when solving for time")]
    ZeroAcceleration,
}

impl KinematicsError {
    /// Name of the input that triggered the error.
    #[must_use]
    pub const fn quantity(&self) -> &'static str {
        match self {
            Self::NegativeTime { .. } | Self::NonPositiveTime { .. } => "time",
            Self::ZeroAcceleration => "acceleration",
        }
    }
}

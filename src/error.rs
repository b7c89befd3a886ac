//! Error types for the equation-of-state configuration path.
//!
//! The numerical operations never fail: unphysical states are floored. Only building an
//! `EquationOfState` from user-supplied parameters can be rejected.

use thiserror::Error;

/// Errors raised while reading or validating EOS parameters.
#[derive(Debug, Error)]
pub enum EosError {
    /// Adiabatic index not finite or not above one
    #[error("adiabatic index gamma must be finite and > 1, got {gamma}")]
    InvalidGamma { gamma: f64 },

    /// A supplied floor is not finite or not positive
    #[error("{name} must be finite and > 0, got {value}")]
    InvalidFloor { name: &'static str, value: f64 },

    /// Malformed parameter text
    #[error("failed to parse EOS parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EosError>;

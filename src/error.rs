//! Input validation errors

use thiserror::Error;

/// Raised when an investment schedule fails validation.
///
/// Validation runs before any simulation, so a failed call never produces a
/// partial result. The engine has no other error class: once inputs pass,
/// the computation cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("projection horizon must cover at least one month")]
    EmptyHorizon,

    #[error("projection horizon of {months} months exceeds the {max} month maximum")]
    HorizonTooLong { months: u32, max: u32 },
}

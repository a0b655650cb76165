// src/error.rs
use std::fmt;

/// Error types for sde-paths operations.
///
/// All of these are configuration or programming errors: they are detected
/// eagerly at the start of the responsible operation and propagated to the
/// caller. None are transient, so nothing here is ever retried.
#[derive(Debug, Clone, PartialEq)]
pub enum SdeError {
    /// Time interval or step size does not describe a usable grid.
    InvalidRange { start: f64, end: f64, step: f64 },

    /// A numeric parameter is outside its admissible domain.
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Two sequences that must be aligned have different lengths.
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// A builder-assembled model is missing its drift or diffusion function.
    UnboundModel { slot: String },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidRange { start, end, step } => {
                write!(
                    f,
                    "Invalid time range: start = {}, end = {}, step = {} (need end > start and step > 0)",
                    start, end, step
                )
            }
            SdeError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SdeError::LengthMismatch {
                what,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Length mismatch for {}: expected {}, got {}",
                    what, expected, actual
                )
            }
            SdeError::UnboundModel { slot } => {
                write!(f, "Model is unbound: no {} function was set", slot)
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for sde-paths operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value <= 0.0 {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SdeResult<()> {
        if value < 0.0 {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a correlation coefficient
    pub fn validate_correlation(name: &str, rho: f64) -> SdeResult<()> {
        if !(-1.0..=1.0).contains(&rho) {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value: rho,
                constraint: "must be in range [-1, 1]".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a `[start, end]` interval with step size
    pub fn validate_grid(start: f64, end: f64, step: f64) -> SdeResult<()> {
        if step <= 0.0 || end <= start || !start.is_finite() || !end.is_finite() || !step.is_finite()
        {
            Err(SdeError::InvalidRange { start, end, step })
        } else {
            Ok(())
        }
    }

    /// Validate that two aligned sequences have the same length
    pub fn validate_same_length(what: &str, expected: usize, actual: usize) -> SdeResult<()> {
        if expected != actual {
            Err(SdeError::LengthMismatch {
                what: what.to_string(),
                expected,
                actual,
            })
        } else {
            Ok(())
        }
    }
}

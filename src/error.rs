// src/error.rs
use std::fmt;

/// Custom error types for the ito-path library
#[derive(Debug, Clone)]
pub enum SdeError {
    /// Time horizon is zero or negative
    InvalidTimeBound { value: f64 },

    /// Step size is zero or negative
    InvalidStepSize { value: f64 },

    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// A supplied Brownian path has fewer points than the time grid needs
    PathTooShort { required: usize, actual: usize },

    /// A non-finite state appeared mid-path; `prefix` holds the values
    /// computed before the failing step
    NumericDivergence {
        method: String,
        step: usize,
        value: f64,
        prefix: Vec<f64>,
    },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidTimeBound { value } => {
                write!(f, "Invalid time bound {}: must be positive (> 0)", value)
            }
            SdeError::InvalidStepSize { value } => {
                write!(f, "Invalid step size {}: must be positive (> 0)", value)
            }
            SdeError::InvalidParameters {
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
            SdeError::PathTooShort { required, actual } => {
                write!(
                    f,
                    "Brownian path too short: grid needs {} points, got {}",
                    required, actual
                )
            }
            SdeError::NumericDivergence {
                method,
                step,
                value,
                prefix,
            } => {
                write!(
                    f,
                    "Numerical divergence in {} at step {}: state became {} ({} finite values retained)",
                    method,
                    step,
                    value,
                    prefix.len()
                )
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for ito-path operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate a time horizon `T > 0`
    pub fn validate_time_bound(value: f64) -> SdeResult<()> {
        if !value.is_finite() || value <= 0.0 {
            Err(SdeError::InvalidTimeBound { value })
        } else {
            Ok(())
        }
    }

    /// Validate a step size `dt > 0`
    pub fn validate_step_size(value: f64) -> SdeResult<()> {
        if !value.is_finite() || value <= 0.0 {
            Err(SdeError::InvalidStepSize { value })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value <= 0.0 {
            Err(SdeError::InvalidParameters {
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
            Err(SdeError::InvalidParameters {
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
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a grid refinement factor
    pub fn validate_factor(factor: usize) -> SdeResult<()> {
        if factor == 0 {
            Err(SdeError::InvalidParameters {
                parameter: "factor".to_string(),
                value: 0.0,
                constraint: "must be at least 1".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

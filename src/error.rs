//! Error types for BMI input validation

use std::fmt;
use thiserror::Error;

/// Which user input an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Weight,
    Height,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Weight => write!(f, "weight"),
            InputField::Height => write!(f, "height"),
        }
    }
}

/// Error type for measurement validation
///
/// Either the text did not parse as a finite number, or the parsed value
/// was zero or negative. Validation rejects the whole computation; no
/// partial state is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input text did not parse as a finite number
    #[error("{field} is not a number: {input:?}")]
    NotANumber { field: InputField, input: String },

    /// Parsed value was zero or negative
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: InputField, value: f64 },
}

impl ValidationError {
    /// The input field the error refers to
    pub fn field(&self) -> InputField {
        match self {
            ValidationError::NotANumber { field, .. } => *field,
            ValidationError::NonPositive { field, .. } => *field,
        }
    }
}

/// Result type for BMI operations
pub type Result<T> = std::result::Result<T, ValidationError>;

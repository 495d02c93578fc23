//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday does not match the `YYYY-MM-DD` pattern.
    InvalidDateFormat(String),

    /// The provided birthday has an out-of-range month or day.
    InvalidDateRange(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected exactly 10 digits)", phone)
            }
            Self::InvalidDateFormat(value) => {
                write!(f, "Invalid date format: {} (expected YYYY-MM-DD)", value)
            }
            Self::InvalidDateRange(value) => {
                write!(
                    f,
                    "Invalid date range: {} (month must be in 1-12, day in 1-31)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

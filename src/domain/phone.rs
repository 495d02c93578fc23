//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time
/// and on every reassignment, so an invalid number is never observable.
/// Equality is by the wrapped value, which is what makes the duplicate
/// guard in [`Record`](crate::models::Record) work.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.value(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    field: Field<String>,
}

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly 10 characters long
    /// - Every character must be an ASCII decimal digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }

        Ok(Self {
            field: Field::new(value),
        })
    }

    /// Validate phone format: exactly 10 digit characters.
    fn is_valid(value: &str) -> bool {
        value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
    }

    /// Replace the stored number, re-validating with the same rule.
    ///
    /// The previous value stays in place when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the new value is invalid.
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();

        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }

        self.field.set_value(value);
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.field.into_inner()
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.field.value().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)
    }
}

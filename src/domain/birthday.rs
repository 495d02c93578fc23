//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for birthday strings.
///
/// The value must match the `YYYY-MM-DD` pattern with month in [1, 12]
/// and day in [1, 31]. The day is NOT checked against the specific
/// month's length, so "2023-02-31" is accepted; callers that need a
/// real calendar date get an absence from the countdown instead (see
/// [`Record::days_to_birthday`](crate::models::Record::days_to_birthday)).
/// `Display` returns the original string, not a reformatted date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-15").unwrap();
/// assert_eq!(birthday.value(), "1990-05-15");
/// assert_eq!(birthday.month(), 5);
/// assert_eq!(birthday.day(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    field: Field<String>,
    month: u32,
    day: u32,
}

impl Birthday {
    /// Create a new Birthday, validating the format and ranges.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the value does not
    /// parse as `YYYY-MM-DD`, or `ValidationError::InvalidDateRange` if
    /// the month or day falls outside its range.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let (month, day) = Self::parse(&value)?;

        Ok(Self {
            field: Field::new(value),
            month,
            day,
        })
    }

    /// Parse `YYYY-MM-DD`, returning the month and day components.
    ///
    /// The parse is deliberately lenient about zero-padding, matching
    /// strptime: "1990-5-15" is as valid as "1990-05-15".
    fn parse(value: &str) -> Result<(u32, u32), ValidationError> {
        let parts: Vec<&str> = value.split('-').collect();
        if parts.len() != 3 {
            return Err(ValidationError::InvalidDateFormat(value.to_string()));
        }

        let (year, month, day) = (parts[0], parts[1], parts[2]);
        let numeric = |part: &str, max_len: usize| {
            !part.is_empty() && part.len() <= max_len && part.chars().all(|c| c.is_ascii_digit())
        };
        if !numeric(year, 4) || !numeric(month, 2) || !numeric(day, 2) {
            return Err(ValidationError::InvalidDateFormat(value.to_string()));
        }

        // Lengths are checked above, so these cannot overflow u32.
        let month: u32 = month.parse().map_err(|_| {
            ValidationError::InvalidDateFormat(value.to_string())
        })?;
        let day: u32 = day.parse().map_err(|_| {
            ValidationError::InvalidDateFormat(value.to_string())
        })?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(ValidationError::InvalidDateRange(value.to_string()));
        }

        Ok((month, day))
    }

    /// Replace the stored date, re-validating with the same rules.
    ///
    /// The previous value stays in place when validation fails.
    ///
    /// # Errors
    ///
    /// Same contract as [`Birthday::new`].
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        let (month, day) = Self::parse(&value)?;

        self.field.set_value(value);
        self.month = month;
        self.day = day;
        Ok(())
    }

    /// Get the original date string.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// The month component, in [1, 12].
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day component, in [1, 31].
    pub fn day(&self) -> u32 {
        self.day
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.field.value().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - the original string, unreformatted
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)
    }
}

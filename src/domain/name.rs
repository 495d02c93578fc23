//! Name value object.

use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's display name.
///
/// Unlike [`Phone`](super::Phone) and [`Birthday`](super::Birthday),
/// a name carries no validation: any string is accepted, including an
/// empty one. Whether empty or duplicate names are sensible is the
/// caller's policy, not this type's.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    field: Field<String>,
}

impl Name {
    /// Create a new Name. Never fails.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            field: Field::new(value.into()),
        }
    }

    /// Get the name as a string slice.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// Replace the stored name.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.field.set_value(value.into());
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.field.into_inner()
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.field.value().serialize(serializer)
    }
}

// Serde support - deserialize from string
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Name::new(s))
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)
    }
}

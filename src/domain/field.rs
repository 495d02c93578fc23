//! Generic field value holder.

use std::fmt;

/// A generic single-value holder.
///
/// `Field` is the base capability shared by the typed contact fields: it
/// stores exactly one value, exposes read/write access, and renders
/// through `Display` when the value does. It performs no validation of
/// its own; wrappers like [`Phone`](super::Phone) and
/// [`Birthday`](super::Birthday) enforce their rules before a value
/// reaches the field.
///
/// # Example
///
/// ```
/// use address_book::domain::Field;
///
/// let mut field = Field::new(42);
/// assert_eq!(*field.value(), 42);
/// field.set_value(7);
/// assert_eq!(field.to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field<T> {
    value: T,
}

impl<T> Field<T> {
    /// Create a new Field holding `value` as-is.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Get a reference to the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the stored value.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

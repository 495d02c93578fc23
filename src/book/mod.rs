//! The address book collection.
//!
//! An [`AddressBook`] maps contact names to [`Record`]s while keeping
//! insertion order, which is what the paginated view iterates in.

pub mod pages;

pub use pages::Pages;

use crate::error::{PaginationError, PaginationResult};
use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A name-keyed, insertion-ordered collection of contact records.
///
/// Keys are unique: adding a record whose name matches an existing key
/// silently overwrites the prior record (last write wins) and keeps the
/// entry's original position. Every `AddressBook` is an independent
/// value; there is no shared or process-wide state.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John Doe"));
/// assert!(book.find("John Doe").is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name value.
    ///
    /// An existing record under the same name is replaced without
    /// complaint; its position in the iteration order is preserved.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().value().to_string();
        debug!(name = %name, "adding record");
        self.records.insert(name, record);
    }

    /// Look up a record by exact name. Absence is not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record under `name`, if present.
    ///
    /// Removing an absent name is a no-op. The order of the remaining
    /// entries is preserved.
    pub fn delete(&mut self, name: &str) {
        if self.records.shift_remove(name).is_some() {
            debug!(name = %name, "deleted record");
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Produce a lazy sequence of rendered text pages.
    ///
    /// Each page covers up to `page_size` consecutive records in
    /// insertion order; the final partial page is still emitted when
    /// non-empty, and an empty book yields no pages at all.
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::InvalidPageSize` when `page_size` is 0.
    pub fn iterate(&self, page_size: usize) -> PaginationResult<Pages<'_>> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize(page_size));
        }
        Ok(Pages::new(self.records.iter(), page_size))
    }
}

// Display support - for human eyes only, not a parseable format
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .records
            .iter()
            .map(|(name, record)| format!("{}: {}", name, record))
            .collect();
        write!(f, "{{\n{}\n}}", entries.join(",\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("John Doe", "1234567890"));

        let record = book.find("John Doe").unwrap();
        assert_eq!(record.name().value(), "John Doe");
        assert!(book.find("Nobody").is_none());
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("John Doe", "1111111111"));
        book.add_record(sample_record("John Doe", "2222222222"));

        assert_eq!(book.len(), 1);
        let record = book.find("John Doe").unwrap();
        assert!(record.find_phone("2222222222").is_some());
        assert!(record.find_phone("1111111111").is_none());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("A", "1111111111"));
        book.add_record(sample_record("B", "2222222222"));
        book.add_record(sample_record("A", "3333333333"));

        let names: Vec<&str> = book.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_delete_then_find_is_absent() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("John Doe", "1234567890"));
        book.delete("John Doe");
        assert!(book.find("John Doe").is_none());
        assert!(book.is_empty());

        // Deleting an absent name is a no-op.
        book.delete("John Doe");
    }

    #[test]
    fn test_find_mut_allows_record_edits() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("John Doe", "1111111111"));

        book.find_mut("John Doe")
            .unwrap()
            .edit_phone("1111111111", "2222222222")
            .unwrap();
        assert!(book.find("John Doe").unwrap().find_phone("2222222222").is_some());
    }

    #[test]
    fn test_iterate_rejects_zero_page_size() {
        let book = AddressBook::new();
        assert_eq!(
            book.iterate(0).unwrap_err(),
            PaginationError::InvalidPageSize(0)
        );
    }

    #[test]
    fn test_display_format() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("A", "1111111111"));
        book.add_record(sample_record("B", "2222222222"));

        assert_eq!(
            book.to_string(),
            "{\nA: Contact name: A, phones: 1111111111,\nB: Contact name: B, phones: 2222222222\n}"
        );
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("B", "1111111111"));
        book.add_record(sample_record("A", "2222222222"));

        let json = serde_json::to_string(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = back.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}

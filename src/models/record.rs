//! Record model representing one contact's aggregated data.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: one name, an ordered list of phones, and an
/// optional birthday.
///
/// The name is fixed at construction and doubles as the record's
/// identity inside an [`AddressBook`](crate::book::AddressBook). Phones
/// keep their insertion order, and the same number is never stored
/// twice (duplicates compare by value, not identity). The birthday, when
/// given, is validated up front; a record never holds a raw unvalidated
/// date string.
///
/// # Example
///
/// ```
/// use address_book::Record;
///
/// let mut record = Record::with_birthday("John Doe", "1990-05-15").unwrap();
/// record.add_phone("1234567890").unwrap();
/// assert!(record.find_phone("1234567890").is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a new record with a birthday, validating the date string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `birthday` is not a valid
    /// `YYYY-MM-DD` string with month in [1, 12] and day in [1, 31].
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name);
        record.birthday = Some(Birthday::new(birthday)?);
        Ok(record)
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday, validating the date string.
    ///
    /// # Errors
    ///
    /// Same contract as [`Birthday::new`].
    pub fn set_birthday(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Remove the birthday, if any.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Add a phone number, ignoring duplicates.
    ///
    /// The number is validated first; a value already present on the
    /// record is silently skipped, so adding the same number twice
    /// leaves exactly one entry.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `number` is not
    /// exactly 10 digits.
    pub fn add_phone(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(number)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Find the first phone whose value equals `number`.
    ///
    /// Returns `None` when no phone matches; an absent phone is not an
    /// error here. The query string itself is not validated.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.value() == number)
    }

    /// Replace the first phone whose value equals `old` with `new`,
    /// preserving its position.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if either string fails phone
    /// validation, or `RecordError::PhoneNotFound` if no phone with
    /// value `old` exists.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;

        match self.phones.iter().position(|phone| *phone == old) {
            Some(index) => {
                self.phones[index] = new;
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound(old.into_inner())),
        }
    }

    /// Remove every phone whose value equals `number`.
    ///
    /// Given the duplicate guard there is at most one match; removing a
    /// number that is not present is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `number` is not
    /// exactly 10 digits.
    pub fn remove_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let target = Phone::new(number)?;
        self.phones.retain(|phone| *phone != target);
        Ok(())
    }

    /// Whole days until the next occurrence of the birthday, as a
    /// human-readable message.
    ///
    /// Returns `None` when no birthday is set, or when the stored
    /// month/day never lands on a real calendar date (the lenient
    /// validation admits e.g. "02-31", which has no next occurrence).
    pub fn days_to_birthday(&self) -> Option<String> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Like [`Record::days_to_birthday`], with the current date injected.
    ///
    /// If today is strictly after this year's occurrence, the countdown
    /// rolls over to next year; on the day itself it reports 0 days.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<String> {
        let birthday = self.birthday.as_ref()?;
        let (month, day) = (birthday.month(), birthday.day());

        let mut next = NaiveDate::from_ymd_opt(today.year(), month, day)?;
        if today > next {
            next = NaiveDate::from_ymd_opt(today.year() + 1, month, day)?;
        }

        let days_left = (next - today).num_days();
        Some(format!(
            "{} days left until birthday {}",
            days_left,
            self.name.value()
        ))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::value).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name.value(),
            phones.join("; ")
        )?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("John Doe");
        assert_eq!(record.name().value(), "John Doe");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_with_birthday_validates() {
        let record = Record::with_birthday("John Doe", "1990-05-15").unwrap();
        assert_eq!(record.birthday().unwrap().value(), "1990-05-15");

        assert!(Record::with_birthday("John Doe", "1990-13-15").is_err());
    }

    #[test]
    fn test_add_phone_deduplicates_by_value() {
        let mut record = Record::new("John Doe");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = Record::new("John Doe");
        assert!(record.add_phone("123").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("John Doe");
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.find_phone("1234567890").unwrap().value(), "1234567890");
        assert!(record.find_phone("9999999999").is_none());
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = Record::new("John Doe");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();

        record.edit_phone("2222222222", "4444444444").unwrap();
        let values: Vec<&str> = record.phones().iter().map(Phone::value).collect();
        assert_eq!(values, vec!["1111111111", "4444444444", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_missing_is_error() {
        let mut record = Record::new("John Doe");
        record.add_phone("1111111111").unwrap();
        let err = record.edit_phone("2222222222", "4444444444").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("2222222222".to_string()));
    }

    #[test]
    fn test_edit_phone_invalid_input_is_validation_error() {
        let mut record = Record::new("John Doe");
        assert!(matches!(
            record.edit_phone("bad", "4444444444").unwrap_err(),
            RecordError::Validation(_)
        ));
        assert!(matches!(
            record.edit_phone("1111111111", "bad").unwrap_err(),
            RecordError::Validation(_)
        ));
    }

    #[test]
    fn test_remove_phone() {
        let mut record = Record::new("John Doe");
        record.add_phone("1111111111").unwrap();
        record.remove_phone("1111111111").unwrap();
        assert!(record.phones().is_empty());

        // Absent value is a no-op, not an error.
        assert!(record.remove_phone("2222222222").is_ok());
    }

    #[test]
    fn test_days_to_birthday_none_without_birthday() {
        let record = Record::new("John Doe");
        assert!(record.days_to_birthday().is_none());
    }

    #[test]
    fn test_days_to_birthday_upcoming() {
        let record = Record::with_birthday("John Doe", "1990-05-15").unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
        assert_eq!(
            record.days_to_birthday_from(today).unwrap(),
            "5 days left until birthday John Doe"
        );
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let record = Record::with_birthday("John Doe", "1990-05-15").unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 5, 15).unwrap();
        assert_eq!(
            record.days_to_birthday_from(today).unwrap(),
            "0 days left until birthday John Doe"
        );
    }

    #[test]
    fn test_days_to_birthday_rolls_over_to_next_year() {
        let record = Record::with_birthday("John Doe", "1990-05-15").unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 5, 20).unwrap();
        // 2024 is a leap year, so the span crosses Feb 29.
        assert_eq!(
            record.days_to_birthday_from(today).unwrap(),
            "361 days left until birthday John Doe"
        );
    }

    #[test]
    fn test_days_to_birthday_unrepresentable_date_is_absent() {
        let record = Record::with_birthday("John Doe", "2000-02-31").unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert!(record.days_to_birthday_from(today).is_none());
    }

    #[test]
    fn test_display_without_birthday() {
        let mut record = Record::new("Jane Smith");
        record.add_phone("5551112233").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Jane Smith, phones: 5551112233"
        );
    }

    #[test]
    fn test_display_with_birthday_and_phone_separator() {
        let mut record = Record::with_birthday("John Doe", "1990-05-15").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("9876543210").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John Doe, phones: 1234567890; 9876543210, birthday: 1990-05-15"
        );
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = Record::with_birthday("John Doe", "1990-05-15").unwrap();
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"John Doe","phones":["12345"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

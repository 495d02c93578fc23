//! Error types for the address book.
//!
//! This module defines the operational error types using `thiserror`.
//! Field-level validation failures live in
//! [`crate::domain::ValidationError`] and convert into these via `#[from]`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a record's phones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A phone or birthday value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No phone with the given value exists on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur when paginating an address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// The requested page size cannot form pages
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with PaginationError
pub type PaginationResult<T> = Result<T, PaginationError>;

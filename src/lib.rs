//! Address Book - an in-memory contact data model.
//!
//! This library stores contact records (name, phone numbers, optional
//! birthday), validates every mutation at the edge, and supports lookup,
//! deletion, string rendering, and paginated iteration. Everything is
//! synchronous and in-memory: no persistence, no locking, no network.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (`Field`, `Name`, `Phone`, `Birthday`)
//! - **models**: the `Record` aggregate for a single contact
//! - **book**: the name-keyed `AddressBook` collection and its page iterator
//! - **error**: operational error types for precise error handling

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Pages};
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{PaginationError, PaginationResult, RecordError, RecordResult};
pub use models::Record;

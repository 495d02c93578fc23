//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact fields: names,
//! phone numbers, and birthdays. These value objects provide validation
//! at construction time and on reassignment, so invalid data cannot be
//! represented in the system. All of them are specializations of the
//! generic [`Field`] holder.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;

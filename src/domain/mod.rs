//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated parts of a
//! contact: email addresses, phone numbers, and names. These value objects
//! provide validation at construction time and prevent invalid data from
//! reaching the backing file.

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::{NameValidation, PersonName};
pub use phone::PhoneNumber;

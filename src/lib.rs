//! Contact Book - a terminal contact book backed by a flat CSV file.
//!
//! Contacts (email, first name, last name, phone number) are loaded from the
//! backing file, validated and mutated one record at a time, and written back
//! in full after every change. Email addresses and phone numbers are unique,
//! and phone numbers must match `NNN-NNN-NNNN` or `(NNN) NNN-NNNN`.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for emails, phone numbers, and names
//! - **models**: The contact record, the ordered contact book, and numbered listings
//! - **repositories**: Loading and persisting the book (CSV file)
//! - **services**: The load/mutate/persist lifecycle for each operation
//! - **cli**: The interactive menu that drives the services
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use cli::{Command, Controller};
pub use config::Config;
pub use domain::{EmailAddress, NameValidation, PersonName, PhoneNumber, ValidationError};
pub use error::{ConfigError, StoreError, StoreResult};
pub use models::{Contact, ContactBook, ContactEdit, Listing};
pub use repositories::{ContactRepository, CsvContactRepository};
pub use services::ContactService;

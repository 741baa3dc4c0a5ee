//! Data models for the contact book.
//!
//! This module contains the contact record, the ordered in-memory book that
//! enforces the uniqueness and format rules, and the numbered listings the
//! interactive menus select from.

pub mod book;
pub mod contact;
pub mod listing;

pub use book::ContactBook;
pub use contact::{Contact, ContactEdit, CSV_HEADER};
pub use listing::Listing;

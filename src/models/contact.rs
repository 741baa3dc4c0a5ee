//! Contact model representing one row of the backing file.

use serde::{Deserialize, Serialize};

/// Column names of the backing file, in order.
pub const CSV_HEADER: [&str; 4] = ["email", "first_name", "last_name", "phone_number"];

/// A contact in the contact book.
///
/// Field order matches the CSV columns, so the struct serializes straight
/// into a data row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    /// Email address, unique across the book (primary key)
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number, unique across the book, kept exactly as typed
    pub phone_number: String,
}

impl Contact {
    /// Create a new contact from its four fields.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Full name (first and last joined by a space).
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// The part of the email address after '@', or "" when there is none.
    pub fn domain(&self) -> &str {
        self.email
            .split_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("")
    }
}

/// Changes to apply to an existing contact.
///
/// `None` and blank strings both keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactEdit {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl ContactEdit {
    /// Edit that only replaces the phone number.
    pub fn phone(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            ..Default::default()
        }
    }

    /// Edit that only replaces the email address.
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Whether no field would change.
    pub fn is_empty(&self) -> bool {
        [
            &self.email,
            &self.first_name,
            &self.last_name,
            &self.phone_number,
        ]
        .iter()
        .all(|field| supplied(field).is_none())
    }
}

/// The supplied value of an optional field, treating blank input as absent.
pub(crate) fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

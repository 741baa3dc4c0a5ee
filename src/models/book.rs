//! In-memory contact book and its mutation rules.
//!
//! `ContactBook` owns every invariant of the stored collection: unique emails,
//! unique phone numbers, and accepted phone formats. Mutations validate first
//! and only then touch the collection, so a failed call leaves the book
//! exactly as it was.

use super::contact::{supplied, Contact, ContactEdit};
use super::listing::Listing;
use crate::domain::{EmailAddress, NameValidation, PersonName, PhoneNumber};
use crate::error::{StoreError, StoreResult};
use std::collections::BTreeMap;

/// Ordered mapping from email to contact.
///
/// Iteration order is insertion order (file order after a load). Display
/// order is by email, see [`ContactBook::sorted_by_email`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact read from storage without validation.
    ///
    /// A second row with the same email replaces the first one's values but
    /// keeps its position.
    pub fn insert_loaded(&mut self, contact: Contact) {
        match self.position(&contact.email) {
            Some(i) => self.contacts[i] = contact,
            None => self.contacts.push(contact),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Look up a contact by email.
    pub fn get(&self, email: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.email == email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.position(email).is_some()
    }

    fn position(&self, email: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.email == email)
    }

    /// Check an email address for format and uniqueness.
    ///
    /// `editing` names the record being edited; its own email is not counted
    /// as a duplicate.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` for a malformed address, `DuplicateEmail` if another
    /// record already uses it (case-sensitive exact match).
    pub fn validate_email(&self, candidate: &str, editing: Option<&str>) -> StoreResult<EmailAddress> {
        let email = EmailAddress::new(candidate)?;

        let taken = self
            .contacts
            .iter()
            .filter(|c| Some(c.email.as_str()) != editing)
            .any(|c| c.email == email.as_str());

        if taken {
            return Err(StoreError::DuplicateEmail(email.into_inner()));
        }

        Ok(email)
    }

    /// Check a phone number for format and uniqueness.
    ///
    /// `editing` names the record being edited; its own phone number is not
    /// counted as a duplicate. The accepted number is returned as typed.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` if the number matches neither accepted shape,
    /// `DuplicatePhone` if another record already uses it.
    pub fn validate_phone(&self, candidate: &str, editing: Option<&str>) -> StoreResult<PhoneNumber> {
        let phone = PhoneNumber::new(candidate)?;

        let taken = self
            .contacts
            .iter()
            .filter(|c| Some(c.email.as_str()) != editing)
            .any(|c| c.phone_number == phone.as_str());

        if taken {
            return Err(StoreError::DuplicatePhone(phone.into_inner()));
        }

        Ok(phone)
    }

    /// Check a first or last name under the given mode.
    pub fn validate_name(&self, candidate: &str, mode: NameValidation) -> StoreResult<PersonName> {
        Ok(PersonName::new(candidate, mode)?)
    }

    /// Validate and append a new contact.
    pub fn add_contact(&mut self, contact: Contact, names: NameValidation) -> StoreResult<&Contact> {
        let email = self.validate_email(&contact.email, None)?;
        let first_name = self.validate_name(&contact.first_name, names)?;
        let last_name = self.validate_name(&contact.last_name, names)?;
        let phone = self.validate_phone(&contact.phone_number, None)?;

        self.contacts.push(Contact::new(
            email.into_inner(),
            first_name.into_inner(),
            last_name.into_inner(),
            phone.into_inner(),
        ));

        let added = self.contacts.len() - 1;
        Ok(&self.contacts[added])
    }

    /// Apply an edit to the contact stored under `key`.
    ///
    /// Unsupplied or blank fields keep their current value. The record keeps
    /// its position even when its email changes.
    ///
    /// # Errors
    ///
    /// `NotFound` if `key` is absent, otherwise the same errors as
    /// [`ContactBook::add_contact`].
    pub fn edit_contact(
        &mut self,
        key: &str,
        edit: &ContactEdit,
        names: NameValidation,
    ) -> StoreResult<&Contact> {
        let index = self
            .position(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        let email = supplied(&edit.email)
            .map(|e| self.validate_email(e, Some(key)))
            .transpose()?;
        let first_name = supplied(&edit.first_name)
            .map(|n| self.validate_name(n, names))
            .transpose()?;
        let last_name = supplied(&edit.last_name)
            .map(|n| self.validate_name(n, names))
            .transpose()?;
        let phone = supplied(&edit.phone_number)
            .map(|p| self.validate_phone(p, Some(key)))
            .transpose()?;

        let contact = &mut self.contacts[index];
        if let Some(email) = email {
            contact.email = email.into_inner();
        }
        if let Some(first_name) = first_name {
            contact.first_name = first_name.into_inner();
        }
        if let Some(last_name) = last_name {
            contact.last_name = last_name.into_inner();
        }
        if let Some(phone) = phone {
            contact.phone_number = phone.into_inner();
        }

        Ok(&self.contacts[index])
    }

    /// Remove the contact stored under `key` and return it.
    pub fn delete_contact(&mut self, key: &str) -> StoreResult<Contact> {
        let index = self
            .position(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        Ok(self.contacts.remove(index))
    }

    /// Group emails by domain, both levels sorted ascending.
    pub fn list_by_domain(&self) -> BTreeMap<String, Vec<String>> {
        let mut domains: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for contact in &self.contacts {
            domains
                .entry(contact.domain().to_string())
                .or_default()
                .push(contact.email.clone());
        }
        for emails in domains.values_mut() {
            emails.sort();
        }
        domains
    }

    /// Contacts ordered by email, ascending.
    pub fn sorted_by_email(&self) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by(|a, b| a.email.cmp(&b.email));
        sorted
    }

    /// Contacts whose email belongs to `domain`, ordered by email.
    pub fn in_domain(&self, domain: &str) -> Vec<&Contact> {
        self.sorted_by_email()
            .into_iter()
            .filter(|c| c.domain() == domain)
            .collect()
    }

    /// Number the current contacts for selection.
    pub fn listing(&self) -> Listing {
        Listing::new(self.contacts.iter().map(|c| c.email.as_str()))
    }

    /// Resolve a 1-based index against the current numbering.
    pub fn select_by_index(&self, index: usize) -> StoreResult<&Contact> {
        let listing = self.listing();
        let key = listing.select(index)?;
        self.get(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}

impl FromIterator<Contact> for ContactBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut book = ContactBook::new();
        for contact in iter {
            book.insert_loaded(contact);
        }
        book
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

//! Contact service layer.
//!
//! Every operation follows the same lifecycle: load the whole book from the
//! repository, apply one mutation, and persist the whole book again. Nothing
//! is cached between calls, so the file always reflects the last completed
//! operation.

use crate::domain::NameValidation;
use crate::error::StoreResult;
use crate::models::{Contact, ContactBook, ContactEdit};
use crate::repositories::ContactRepository;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// Load/mutate/persist operations over a contact repository.
pub struct ContactService {
    contact_repo: Arc<dyn ContactRepository>,
    export_repo: Arc<dyn ContactRepository>,
    names: NameValidation,
}

impl ContactService {
    /// Create a new contact service.
    ///
    /// # Arguments
    /// * `contact_repo` - Backing store for the contact book
    /// * `export_repo` - Destination for export snapshots
    /// * `names` - Validation mode for first and last names
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        export_repo: Arc<dyn ContactRepository>,
        names: NameValidation,
    ) -> Self {
        Self {
            contact_repo,
            export_repo,
            names,
        }
    }

    pub fn name_validation(&self) -> NameValidation {
        self.names
    }

    /// Where the contact book is stored.
    pub fn location(&self) -> String {
        self.contact_repo.location()
    }

    /// Where exports are written.
    pub fn export_location(&self) -> String {
        self.export_repo.location()
    }

    /// Read the current book.
    pub fn load(&self) -> StoreResult<ContactBook> {
        self.contact_repo.load()
    }

    /// Replace the stored book.
    pub fn persist(&self, book: &ContactBook) -> StoreResult<()> {
        self.contact_repo.persist(book)
    }

    /// Validate and store a new contact.
    pub fn add_contact(&self, contact: Contact) -> StoreResult<Contact> {
        let mut book = self.load()?;
        let added = book.add_contact(contact, self.names)?.clone();
        self.persist(&book)?;

        info!("Added contact {}", added.email);
        Ok(added)
    }

    /// Apply an edit to the contact stored under `key`.
    pub fn edit_contact(&self, key: &str, edit: &ContactEdit) -> StoreResult<Contact> {
        let mut book = self.load()?;
        let edited = book.edit_contact(key, edit, self.names)?.clone();
        self.persist(&book)?;

        if edited.email != key {
            info!("Edited contact {} (now {})", key, edited.email);
        } else {
            info!("Edited contact {}", key);
        }
        Ok(edited)
    }

    /// Remove the contact stored under `key`.
    pub fn delete_contact(&self, key: &str) -> StoreResult<Contact> {
        let mut book = self.load()?;
        let removed = book.delete_contact(key)?;
        self.persist(&book)?;

        info!("Deleted contact {}", removed.email);
        Ok(removed)
    }

    /// Emails grouped by domain.
    pub fn list_by_domain(&self) -> StoreResult<BTreeMap<String, Vec<String>>> {
        Ok(self.load()?.list_by_domain())
    }

    /// Write a snapshot of the book, sorted by email, to the export repository.
    ///
    /// Returns the number of exported contacts.
    pub fn export(&self) -> StoreResult<usize> {
        let book = self.load()?;
        let snapshot: ContactBook = book.sorted_by_email().into_iter().cloned().collect();
        self.export_repo.persist(&snapshot)?;

        info!(
            "Exported {} contacts to {}",
            snapshot.len(),
            self.export_repo.location()
        );
        Ok(snapshot.len())
    }
}

use contact_book::error::{StoreError, StoreResult};
use contact_book::models::{Contact, ContactBook};
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily seeded with test data, tracks method calls for verification, and
/// can be told to fail writes.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    book: Arc<Mutex<ContactBook>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_persist: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            book: Arc::new(Mutex::new(ContactBook::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_persist: Arc::new(Mutex::new(false)),
        }
    }

    /// Add a contact to the mock repository without validation.
    pub fn add_contact(&self, contact: Contact) {
        let mut book = self.book.lock().unwrap();
        book.insert_loaded(contact);
    }

    /// Add multiple contacts to the mock repository.
    pub fn add_contacts(&self, contacts: Vec<Contact>) {
        let mut book = self.book.lock().unwrap();
        for contact in contacts {
            book.insert_loaded(contact);
        }
    }

    /// Snapshot of the stored book.
    pub fn snapshot(&self) -> ContactBook {
        self.book.lock().unwrap().clone()
    }

    /// Make every subsequent persist fail with an I/O error.
    pub fn fail_writes(&self) {
        *self.fail_persist.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> StoreResult<ContactBook> {
        self.track_call("load");
        Ok(self.book.lock().unwrap().clone())
    }

    fn persist(&self, book: &ContactBook) -> StoreResult<()> {
        self.track_call("persist");

        if *self.fail_persist.lock().unwrap() {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock write failure",
            )));
        }

        *self.book.lock().unwrap() = book.clone();
        Ok(())
    }

    fn location(&self) -> String {
        "mock contacts".to_string()
    }
}

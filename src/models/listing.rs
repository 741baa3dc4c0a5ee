//! Numbered listings used for interactive selection.

use crate::error::{StoreError, StoreResult};

/// A 1-based numbering of keys, taken from a snapshot of the book.
///
/// A listing is a transient projection: it is only valid against the book it
/// was built from. Rebuild it after every add or delete and redisplay it
/// before accepting another selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    keys: Vec<String>,
}

impl Listing {
    /// Number the given keys in iteration order, starting at 1.
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve a 1-based index to its key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the index is outside `1..=len`.
    pub fn select(&self, index: usize) -> StoreResult<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.keys.get(i))
            .map(String::as_str)
            .ok_or_else(|| StoreError::NotFound(format!("selection {}", index)))
    }

    /// Iterate `(number, key)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.keys
            .iter()
            .enumerate()
            .map(|(i, key)| (i + 1, key.as_str()))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

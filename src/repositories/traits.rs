use crate::error::StoreResult;
use crate::models::ContactBook;

/// Repository for the contact book.
///
/// Provides abstraction over where the book is kept, enabling different
/// implementations (CSV file, in-memory mock). Every call works on the whole
/// collection: `load` reads everything, `persist` replaces everything.
pub trait ContactRepository: Send + Sync {
    /// Read the full book from storage.
    fn load(&self) -> StoreResult<ContactBook>;

    /// Replace the stored book with `book`, in its iteration order.
    ///
    /// Implementations must leave the previous content untouched if the
    /// write fails.
    fn persist(&self, book: &ContactBook) -> StoreResult<()>;

    /// Human-readable name of the storage location, for operator messages.
    fn location(&self) -> String;
}

//! Kitep Core Library
//!
//! This crate provides the domain types and the pure logic of the kitep
//! digital-library client: locale-aware field resolution, the client-side
//! search/filter engine, and the selection and load state a front end drives.
//! Records coming off the wire are normalized into these types once, at the
//! boundary; everything downstream is synchronous in-memory computation.

pub mod error;
pub mod filter;
pub mod locale;
pub mod selection;
pub mod session;
pub mod types;

pub use error::{FetchError, Result};
pub use filter::filter_books;
pub use locale::{Locale, LocalizedText, UnknownLocale};
pub use selection::Selection;
pub use session::{Generation, LibrarySession, LoadState, Snapshot};
pub use types::{Book, BookId, Category, CategoryId};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_filter_on_empty_collection() {
        let books: Vec<Book> = Vec::new();
        let selected: BTreeSet<CategoryId> = BTreeSet::new();
        assert!(filter_books(&books, "anything", &selected).is_empty());
    }
}

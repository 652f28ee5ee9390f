//! The user's current search query and category choices

use crate::filter::filter_books;
use crate::types::{Book, CategoryId};
use std::collections::BTreeSet;

/// Transient selection state for one view: free-text query plus the set of
/// chosen category filters. An empty set means "all categories".
///
/// Every mutation is synchronous; consumers re-derive the visible list with
/// [`Selection::filter`] after any change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    query: String,
    categories: BTreeSet<CategoryId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Add the category if absent, remove it if present. Never duplicates.
    pub fn toggle_category(&mut self, id: CategoryId) {
        if !self.categories.remove(&id) {
            self.categories.insert(id);
        }
    }

    pub fn clear_category(&mut self, id: &CategoryId) {
        self.categories.remove(id);
    }

    /// Back to "all categories" with an empty query.
    pub fn clear_all(&mut self) {
        self.query.clear();
        self.categories.clear();
    }

    /// Drop the category choices but keep the query. Used when the active
    /// locale changes and the category list is about to be refetched.
    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    pub fn categories(&self) -> &BTreeSet<CategoryId> {
        &self.categories
    }

    /// Apply the current selection to a book collection.
    pub fn filter<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        filter_books(books, &self.query, &self.categories)
    }
}

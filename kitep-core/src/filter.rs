//! Client-side search and category filtering

use crate::types::{Book, CategoryId};
use std::collections::BTreeSet;

/// Select the visible subset of `books` for a free-text query and a set of
/// selected categories.
///
/// The query is trimmed, lower-cased and matched as a substring against
/// every locale variant of title, author and description; one matching field
/// is enough. An empty query matches every book, and an empty category set
/// means "all categories". Output preserves the input order and is always a
/// subset of the input; malformed records with absent fields simply
/// contribute no match.
pub fn filter_books<'a>(
    books: &'a [Book],
    query: &str,
    selected: &BTreeSet<CategoryId>,
) -> Vec<&'a Book> {
    let needle = query.trim().to_lowercase();
    books
        .iter()
        .filter(|book| matches_text(book, &needle) && matches_category(book, selected))
        .collect()
}

fn matches_text(book: &Book, needle: &str) -> bool {
    needle.is_empty()
        || book.title.contains(needle)
        || book.author.contains(needle)
        || book.description.contains(needle)
}

fn matches_category(book: &Book, selected: &BTreeSet<CategoryId>) -> bool {
    selected.is_empty() || selected.contains(&book.category)
}

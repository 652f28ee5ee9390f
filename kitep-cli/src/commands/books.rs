//! Book listing command

use anyhow::{Context, Result};
use kitep_client::{load_snapshot, HttpLibraryClient};
use kitep_core::{Book, Category, CategoryId, Locale, Selection, Snapshot};
use serde::Serialize;

/// One row of the listing, resolved for the active locale.
#[derive(Serialize)]
struct BookRow<'a> {
    id: &'a str,
    title: &'a str,
    author: &'a str,
    year: Option<i32>,
    category: String,
    file: Option<&'a str>,
}

/// Localized category name, falling back to the raw identifier when the
/// category is unknown or unnamed.
fn category_name(categories: &[Category], id: &CategoryId, locale: Locale) -> String {
    categories
        .iter()
        .find(|category| &category.id == id)
        .map(|category| category.name.resolve(locale, Locale::DEFAULT))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}

fn row<'a>(book: &'a Book, snapshot: &'a Snapshot, locale: Locale) -> BookRow<'a> {
    BookRow {
        id: book.id.as_str(),
        title: book.title.resolve(locale, Locale::DEFAULT),
        author: book.author.resolve(locale, Locale::DEFAULT),
        year: book.year,
        category: category_name(&snapshot.categories, &book.category, locale),
        file: book.file.as_deref(),
    }
}

/// List books, applying the search query and category filters client-side.
pub async fn books(
    client: &HttpLibraryClient,
    locale: Locale,
    search: Option<String>,
    categories: Vec<String>,
    json: bool,
) -> Result<()> {
    let snapshot = load_snapshot(client, locale)
        .await
        .context("failed to load the library")?;

    let mut selection = Selection::new();
    if let Some(text) = search {
        selection.set_query(text);
    }
    for id in categories {
        selection.toggle_category(CategoryId::new(id));
    }

    let visible = selection.filter(&snapshot.books);
    let rows: Vec<BookRow> = visible
        .iter()
        .map(|book| row(book, &snapshot, locale))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for entry in &rows {
        let year = entry
            .year
            .map(|year| year.to_string())
            .unwrap_or_default();
        println!(
            "{:>6}  {:<40}  {:<24}  {:>4}  {}",
            entry.id, entry.title, entry.author, year, entry.category
        );
    }
    println!();
    println!("{} of {} books", rows.len(), snapshot.books.len());

    Ok(())
}

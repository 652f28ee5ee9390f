//! Single-book details command

use anyhow::{Context, Result};
use kitep_client::{resolve_file_url, HttpLibraryClient, RemoteLibrary};
use kitep_core::{BookId, Locale};
use serde::Serialize;

/// Book details output
#[derive(Serialize)]
struct BookDetails {
    id: String,
    title: String,
    author: String,
    description: String,
    year: Option<i32>,
    category: String,
    file_url: Option<String>,
}

/// Display one book, with its file reference resolved to an absolute URL.
pub async fn show(client: &HttpLibraryClient, locale: Locale, id: &str, json: bool) -> Result<()> {
    let id = BookId::new(id);
    let (book, categories) = tokio::try_join!(
        client.fetch_book(locale, &id),
        client.fetch_categories(locale),
    )
    .with_context(|| format!("failed to load book {}", id))?;

    let category = categories
        .iter()
        .find(|category| category.id == book.category)
        .map(|category| category.name.resolve(locale, Locale::DEFAULT).to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| book.category.to_string());

    let file_url = resolve_file_url(client.base(), book.file.as_deref())?.map(|url| url.to_string());

    let details = BookDetails {
        id: book.id.to_string(),
        title: book.title.resolve(locale, Locale::DEFAULT).to_string(),
        author: book.author.resolve(locale, Locale::DEFAULT).to_string(),
        description: book.description.resolve(locale, Locale::DEFAULT).to_string(),
        year: book.year,
        category,
        file_url,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("Title:       {}", details.title);
    if !details.author.is_empty() {
        println!("Author:      {}", details.author);
    }
    if let Some(year) = details.year {
        println!("Year:        {}", year);
    }
    println!("Category:    {}", details.category);
    if !details.description.is_empty() {
        println!("Description: {}", details.description);
    }
    if let Some(url) = &details.file_url {
        println!("File:        {}", url);
    }

    Ok(())
}

//! Category listing command

use anyhow::{Context, Result};
use kitep_client::{HttpLibraryClient, RemoteLibrary};
use kitep_core::Locale;
use serde::Serialize;

#[derive(Serialize)]
struct CategoryRow<'a> {
    id: &'a str,
    name: &'a str,
}

/// List the categories available for filtering.
pub async fn categories(client: &HttpLibraryClient, locale: Locale, json: bool) -> Result<()> {
    let categories = client
        .fetch_categories(locale)
        .await
        .context("failed to load categories")?;

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|category| CategoryRow {
            id: category.id.as_str(),
            name: category.name.resolve(locale, Locale::DEFAULT),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!("{:>6}  {}", row.id, row.name);
    }

    Ok(())
}

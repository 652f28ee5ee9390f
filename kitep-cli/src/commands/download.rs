//! Book download command

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use kitep_client::{resolve_file_url, HttpLibraryClient, RemoteLibrary};
use kitep_core::{Book, BookId, Locale};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Target file name when none was given: the localized title, "book" when
/// the record has no resolvable title at all.
fn default_output(book: &Book, locale: Locale) -> PathBuf {
    let title = book.title.resolve(locale, Locale::DEFAULT);
    let stem = if title.is_empty() {
        "book".to_string()
    } else {
        title.replace(['/', '\\'], "_")
    };
    PathBuf::from(format!("{}.pdf", stem))
}

/// Download a book's file to disk.
pub async fn download(
    client: &HttpLibraryClient,
    locale: Locale,
    id: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let id = BookId::new(id);
    let book = client
        .fetch_book(locale, &id)
        .await
        .with_context(|| format!("failed to load book {}", id))?;

    let Some(url) = resolve_file_url(client.base(), book.file.as_deref())? else {
        bail!("book {} has no downloadable file", id);
    };

    let target = output.unwrap_or_else(|| default_output(&book, locale));
    tracing::info!(url = %url, target = %target.display(), "downloading");

    let mut response = client
        .start_download(url)
        .await
        .context("download failed")?;

    let progress = match response.content_length() {
        Some(length) => {
            let bar = ProgressBar::new(length);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {bytes:>10}/{total_bytes:10}")
                    .unwrap()
                    .progress_chars("##-"),
            );
            bar
        }
        None => ProgressBar::new_spinner(),
    };

    let mut file = File::create(&target)
        .with_context(|| format!("failed to create {}", target.display()))?;
    while let Some(chunk) = response.chunk().await.context("download interrupted")? {
        file.write_all(&chunk)?;
        progress.inc(chunk.len() as u64);
    }
    progress.finish();

    println!("Saved {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitep_core::{CategoryId, LocalizedText};

    fn book(title: LocalizedText) -> Book {
        Book {
            id: BookId::new("1"),
            title,
            author: LocalizedText::default(),
            description: LocalizedText::default(),
            year: None,
            category: CategoryId::from(1),
            file: None,
            cover: None,
        }
    }

    #[test]
    fn test_default_output_uses_localized_title() {
        let book = book(LocalizedText::with(Locale::Ru, "Война и мир"));
        assert_eq!(
            default_output(&book, Locale::Ru),
            PathBuf::from("Война и мир.pdf")
        );
    }

    #[test]
    fn test_default_output_sanitizes_path_separators() {
        let book = book(LocalizedText::with(Locale::Ru, "1984/Скотный двор"));
        assert_eq!(
            default_output(&book, Locale::Ru),
            PathBuf::from("1984_Скотный двор.pdf")
        );
    }

    #[test]
    fn test_default_output_falls_back_to_book() {
        let book = book(LocalizedText::default());
        assert_eq!(default_output(&book, Locale::Kg), PathBuf::from("book.pdf"));
    }
}

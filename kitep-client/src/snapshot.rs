//! Combined load of books and categories

use crate::client::RemoteLibrary;
use kitep_core::{FetchError, Locale, Snapshot};

/// Fetch books and categories for a locale in one joined operation.
///
/// Both requests run concurrently and the snapshot exists only when both
/// succeed; if either fails the whole load is failed and the caller shows a
/// retry affordance. There is no partial snapshot.
pub async fn load_snapshot<R>(remote: &R, locale: Locale) -> Result<Snapshot, FetchError>
where
    R: RemoteLibrary + ?Sized,
{
    let (books, categories) = tokio::try_join!(
        remote.fetch_books(locale, &[]),
        remote.fetch_categories(locale),
    )?;
    tracing::debug!(
        books = books.len(),
        categories = categories.len(),
        "library snapshot loaded"
    );
    Ok(Snapshot { books, categories })
}

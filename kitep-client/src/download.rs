//! Resolution of book file references to absolute URLs

use kitep_core::FetchError;
use reqwest::Url;

/// Resolve a book's file reference against the API base.
///
/// Absolute `http(s)` references pass through untouched. Server-relative
/// paths (leading `/`) resolve against the origin, bare relative paths
/// against the base itself, per standard URL join semantics. A book without
/// a file reference yields `Ok(None)`; only a reference that cannot form a
/// URL at all is an error.
pub fn resolve_file_url(base: &Url, file: Option<&str>) -> Result<Option<Url>, FetchError> {
    let Some(reference) = file else {
        return Ok(None);
    };
    let resolved = if reference.starts_with("http://") || reference.starts_with("https://") {
        Url::parse(reference)
    } else {
        base.join(reference)
    };
    resolved
        .map(Some)
        .map_err(|error| FetchError::Decode(format!("bad file reference {reference:?}: {error}")))
}

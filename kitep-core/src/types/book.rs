//! The Book record and its wire-shape normalization

use super::id::{BookId, CategoryId, RawId};
use crate::error::FetchError;
use crate::locale::LocalizedText;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A book as the rest of the crate sees it: one canonical category
/// identifier, per-locale text fields, optional everything else.
///
/// Entities are read-only from the client's perspective; a fetched snapshot
/// is replaced wholesale, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBook")]
pub struct Book {
    pub id: BookId,
    pub title: LocalizedText,
    pub author: LocalizedText,
    pub description: LocalizedText,
    pub year: Option<i32>,
    pub category: CategoryId,
    /// Downloadable file reference: absolute URL or server-relative path.
    pub file: Option<String>,
    /// Cover image reference.
    pub cover: Option<String>,
}

/// Raw wire shape of a book.
///
/// Translated fields arrive flattened (`title_ru`, `title_kg`, bare
/// `title`), and the category reference arrives in one of three shapes;
/// `TryFrom` collapses all of it into [`Book`].
#[derive(Debug, Deserialize)]
pub(crate) struct RawBook {
    id: RawId,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default, alias = "pdfUrl")]
    file: Option<String>,
    #[serde(default)]
    cover: Option<String>,
    #[serde(default)]
    category: Option<RawCategoryRef>,
    #[serde(default)]
    category_id: Option<RawId>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// The `category` field itself: a nested object carrying an `id`, or the
/// identifier directly.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCategoryRef {
    Nested { id: RawId },
    Scalar(RawId),
}

/// Collapse the accepted category shapes to one canonical identifier.
///
/// Precedence when a record carries several at once: nested object, then
/// flat `category_id`, then raw scalar.
fn normalize_category(
    category: Option<RawCategoryRef>,
    category_id: Option<RawId>,
) -> Option<CategoryId> {
    match (category, category_id) {
        (Some(RawCategoryRef::Nested { id }), _) => Some(id.into()),
        (_, Some(id)) => Some(id.into()),
        (Some(RawCategoryRef::Scalar(id)), None) => Some(id.into()),
        (None, None) => None,
    }
}

impl TryFrom<RawBook> for Book {
    type Error = FetchError;

    fn try_from(raw: RawBook) -> Result<Self, Self::Error> {
        let id = BookId::from(raw.id);
        let category = normalize_category(raw.category, raw.category_id).ok_or_else(|| {
            FetchError::Decode(format!("book {} has no category reference", id))
        })?;
        Ok(Self {
            title: LocalizedText::from_flattened(&raw.rest, "title"),
            author: LocalizedText::from_flattened(&raw.rest, "author"),
            description: LocalizedText::from_flattened(&raw.rest, "description"),
            year: raw.year,
            file: raw.file,
            cover: raw.cover,
            id,
            category,
        })
    }
}

//! The Category record

use super::id::{CategoryId, RawId};
use crate::locale::LocalizedText;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A classification a book belongs to, used for filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCategory")]
pub struct Category {
    pub id: CategoryId,
    pub name: LocalizedText,
}

/// Raw wire shape: some backend variants serve `name_ru`/`name_kg`, others a
/// single pre-resolved `name`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCategory {
    id: RawId,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        Self {
            id: raw.id.into(),
            name: LocalizedText::from_flattened(&raw.rest, "name"),
        }
    }
}

//! Canonical identifiers
//!
//! The backend serves identifiers as JSON numbers from one endpoint and as
//! strings from another. Both wire forms collapse to the same canonical
//! string at decode time, so every downstream comparison is string against
//! string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire form of an identifier, accepted as either number or string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn canonical(self) -> String {
        match self {
            RawId::Number(value) => value.to_string(),
            RawId::Text(value) => value,
        }
    }
}

/// Stable identifier of a book.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for BookId {
    fn from(raw: RawId) -> Self {
        Self(raw.canonical())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a category, the unit of filtering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for CategoryId {
    fn from(raw: RawId) -> Self {
        Self(raw.canonical())
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_are_equal() {
        let from_number: CategoryId = serde_json::from_value(serde_json::json!(5)).unwrap();
        let from_string: CategoryId = serde_json::from_value(serde_json::json!("5")).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number, CategoryId::from(5));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = BookId::new("42");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("42"));
    }
}

//! Locale codes and per-locale text resolution
//!
//! The backend flattens translated fields onto records (`title_ru`,
//! `title_kg`, ...). [`LocalizedText`] models those as a map from locale to
//! string with an explicit fallback chain, instead of field-name
//! concatenation at lookup time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian
    Ru,
    /// Kyrgyz
    Kg,
    /// English
    En,
}

impl Locale {
    /// Fallback locale when a record has no value for the active one.
    pub const DEFAULT: Locale = Locale::Ru;

    /// All supported locales, in fallback-preference order.
    pub const ALL: [Locale; 3] = [Locale::Ru, Locale::Kg, Locale::En];

    /// The wire code used in field suffixes and query parameters.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::Kg => "kg",
            Locale::En => "en",
        }
    }

    /// Parse a wire code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "ru" => Some(Locale::Ru),
            "kg" => Some(Locale::Kg),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// A locale code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale code: {0}")]
pub struct UnknownLocale(pub String);

/// Translated variants of one text field.
///
/// Empty strings are treated as absent, so a backend sending `"title_kg":
/// ""` still falls back to the default locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    /// Single-variant text, mainly for construction in tests and fixtures.
    pub fn with(locale: Locale, value: impl Into<String>) -> Self {
        let mut text = Self::default();
        text.set(locale, value);
        text
    }

    /// Store a variant. Empty values are dropped rather than stored.
    pub fn set(&mut self, locale: Locale, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(locale, value);
        }
    }

    /// The variant for `locale`, if present.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.0.get(&locale).map(String::as_str)
    }

    /// Display string for the active locale.
    ///
    /// Falls back to `default` when the active variant is absent, and to the
    /// empty string when both are. Never fails.
    pub fn resolve(&self, active: Locale, default: Locale) -> &str {
        self.0
            .get(&active)
            .or_else(|| self.0.get(&default))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// True when no variant is present in any locale.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring test across every variant.
    ///
    /// `needle` must already be lower-cased; absent variants contribute no
    /// match.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.values().any(|value| value.to_lowercase().contains(needle))
    }

    /// Collect `base` and `base_<locale>` fields from a flattened wire
    /// record. A bare `base` field lands on the default locale; a suffixed
    /// field for the same locale takes precedence over it.
    pub(crate) fn from_flattened(fields: &Map<String, Value>, base: &str) -> Self {
        let mut text = Self::default();
        if let Some(Value::String(value)) = fields.get(base) {
            text.set(Locale::DEFAULT, value.clone());
        }
        for locale in Locale::ALL {
            let key = format!("{}_{}", base, locale.code());
            if let Some(Value::String(value)) = fields.get(&key) {
                text.set(locale, value.clone());
            }
        }
        text
    }
}

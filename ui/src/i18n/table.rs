//! Per-component translation tables and the resolution rule shared by every view.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::language::{LanguageCode, UnknownLanguage};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("table declares `{0}` as its default but has no bundle for it")]
    MissingDefault(LanguageCode),
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
    #[error("no embedded table named `{0}`")]
    NotEmbedded(String),
    #[error("embedded table `{table}` is malformed: {source}")]
    Malformed {
        table: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable mapping from [`LanguageCode`] to a component's content bundle.
///
/// A table always holds a bundle for its declared default language; the
/// constructor refuses anything else, which is what lets [`resolve`] be
/// infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable<B> {
    default: LanguageCode,
    fallback: B,
    translations: BTreeMap<LanguageCode, B>,
}

impl<B> TranslationTable<B> {
    pub fn new<I>(default: LanguageCode, entries: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = (LanguageCode, B)>,
    {
        let mut translations: BTreeMap<LanguageCode, B> = entries.into_iter().collect();
        let fallback = translations
            .remove(&default)
            .ok_or(ContentError::MissingDefault(default))?;
        Ok(Self {
            default,
            fallback,
            translations,
        })
    }

    pub fn default_language(&self) -> LanguageCode {
        self.default
    }

    /// Bundle for exactly `code`, without falling back.
    pub fn get(&self, code: LanguageCode) -> Option<&B> {
        if code == self.default {
            Some(&self.fallback)
        } else {
            self.translations.get(&code)
        }
    }

    pub fn contains(&self, code: LanguageCode) -> bool {
        self.get(code).is_some()
    }

    /// Supported languages in picker order.
    pub fn languages(&self) -> Vec<LanguageCode> {
        LanguageCode::ALL
            .into_iter()
            .filter(|code| self.contains(*code))
            .collect()
    }

    /// Resolve against this table's own default language.
    pub fn resolve(&self, requested: impl AsRef<str>) -> &B {
        resolve(self, requested, self.default)
    }

    fn fallback(&self) -> &B {
        &self.fallback
    }
}

/// Pick the bundle to render for `requested`.
///
/// Returns the bundle for `requested` when the table has one, otherwise the
/// bundle for `default`. Should `default` also be missing, the table's own
/// declared default is used. Bundles are never merged field by field.
pub fn resolve<'t, B>(
    table: &'t TranslationTable<B>,
    requested: impl AsRef<str>,
    default: LanguageCode,
) -> &'t B {
    requested
        .as_ref()
        .parse::<LanguageCode>()
        .ok()
        .and_then(|code| table.get(code))
        .or_else(|| table.get(default))
        .unwrap_or_else(|| table.fallback())
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable<B> {
    default: String,
    languages: BTreeMap<String, B>,
}

impl<B> TryFrom<RawTable<B>> for TranslationTable<B> {
    type Error = ContentError;

    fn try_from(raw: RawTable<B>) -> Result<Self, Self::Error> {
        let default = raw.default.parse::<LanguageCode>()?;
        let entries = raw
            .languages
            .into_iter()
            .map(|(code, bundle)| Ok((code.parse::<LanguageCode>()?, bundle)))
            .collect::<Result<Vec<_>, UnknownLanguage>>()?;
        TranslationTable::new(default, entries)
    }
}

impl<'de, B> Deserialize<'de> for TranslationTable<B>
where
    B: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTable::<B>::deserialize(deserializer)?;
        TranslationTable::try_from(raw).map_err(D::Error::custom)
    }
}

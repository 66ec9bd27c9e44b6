//! Language codes understood by the site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the languages the site is authored in.
///
/// The wire form (`uz`, `en`, `ru`, `kr`) is what the language picker emits,
/// what preferences store and what the embedded tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    Uz,
    En,
    Ru,
    Kr,
}

/// A code that is not one of [`LanguageCode::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code `{0}`")]
pub struct UnknownLanguage(pub String);

impl LanguageCode {
    /// Picker order.
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::Uz,
        LanguageCode::En,
        LanguageCode::Ru,
        LanguageCode::Kr,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::Uz => "uz",
            LanguageCode::En => "en",
            LanguageCode::Ru => "ru",
            LanguageCode::Kr => "kr",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            LanguageCode::Uz => "Oʻzbekcha",
            LanguageCode::En => "English",
            LanguageCode::Ru => "Русский",
            LanguageCode::Kr => "한국어",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            LanguageCode::Uz => "🇺🇿",
            LanguageCode::En => "🇬🇧",
            LanguageCode::Ru => "🇷🇺",
            LanguageCode::Kr => "🇰🇷",
        }
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for lang in LanguageCode::ALL {
            assert_eq!(lang.code().parse::<LanguageCode>(), Ok(lang));
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert!("EN".parse::<LanguageCode>().is_err());
        assert!(" en".parse::<LanguageCode>().is_err());
        // The registration page once used `ko`; only `kr` is a site code.
        assert_eq!(
            "ko".parse::<LanguageCode>(),
            Err(UnknownLanguage("ko".to_string()))
        );
    }

    #[test]
    fn serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&LanguageCode::Kr).unwrap(), "\"kr\"");
        let parsed: LanguageCode = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(parsed, LanguageCode::Ru);
    }

    #[test]
    fn shell_starts_in_uzbek() {
        assert_eq!(LanguageCode::default(), LanguageCode::Uz);
    }
}

//! Localization for the Korean Center site.
//!
//! Every display component owns a private [`TranslationTable`] mapping a
//! [`LanguageCode`] to that component's typed content bundle, and picks the
//! bundle to render with [`resolve`]. An unsupported code silently degrades to
//! the component's default language.
//!
//! Tables are authored as JSON under `ui/i18n/` and embedded at compile time:
//! ```text
//! i18n/
//!   home.json        {"default": "en", "languages": {"uz": {...}, "en": {...}, ...}}
//!   teachers.json
//!   ...
//! ```
//!
//! Usage in a component:
//! ```ignore
//! static TABLE: Lazy<TranslationTable<HeroContent>> = Lazy::new(|| i18n::load_table("home"));
//! let content = TABLE.resolve(lang);
//! ```
//!
//! To add a language: add a variant to [`LanguageCode`], then a bundle for it
//! in every table. `cargo test -p korean-center-ui` runs the completeness lint
//! ([`lint::audit_embedded`]) and reports any field the new bundles miss.

mod language;
pub mod lint;
mod table;

use rust_embed::Embed;
use serde::de::DeserializeOwned;

pub use language::{LanguageCode, UnknownLanguage};
pub use table::{resolve, ContentError, TranslationTable};

/// Embed every table under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

const TABLE_EXTENSION: &str = ".json";

/// Names of all embedded tables (file stems), sorted.
pub fn embedded_table_names() -> Vec<String> {
    let mut names = Localizations::iter()
        .filter_map(|path| path.strip_suffix(TABLE_EXTENSION).map(str::to_string))
        .collect::<Vec<_>>();
    names.sort();
    names
}

/// Raw JSON of an embedded table, for linting.
pub fn embedded_raw(name: &str) -> Result<serde_json::Value, ContentError> {
    let bytes = embedded_bytes(name)?;
    serde_json::from_slice(&bytes).map_err(|source| ContentError::Malformed {
        table: name.to_string(),
        source,
    })
}

/// Decode an embedded table into typed bundles.
pub fn embedded<B: DeserializeOwned>(name: &str) -> Result<TranslationTable<B>, ContentError> {
    let bytes = embedded_bytes(name)?;
    serde_json::from_slice(&bytes).map_err(|source| ContentError::Malformed {
        table: name.to_string(),
        source,
    })
}

/// Load a component's table at first use.
///
/// Tables are compiled into the binary and every one of them is decoded by
/// the crate's tests, so a failure here is a build defect.
pub fn load_table<B: DeserializeOwned>(name: &str) -> TranslationTable<B> {
    match embedded(name) {
        Ok(table) => {
            tracing::debug!(table = name, languages = ?table.languages(), "loaded translation table");
            table
        }
        Err(err) => panic!("[i18n] {err}"),
    }
}

fn embedded_bytes(name: &str) -> Result<std::borrow::Cow<'static, [u8]>, ContentError> {
    Localizations::get(&format!("{name}{TABLE_EXTENSION}"))
        .map(|file| file.data)
        .ok_or_else(|| ContentError::NotEmbedded(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_component_table_is_embedded() {
        let names = embedded_table_names();
        for expected in [
            "about",
            "contact",
            "courses",
            "footer",
            "gallery",
            "header",
            "home",
            "language_modal",
            "register",
            "teachers",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}.json");
        }
    }

    #[test]
    fn unknown_table_is_reported() {
        let err = embedded_raw("nope").unwrap_err();
        assert!(matches!(err, ContentError::NotEmbedded(name) if name == "nope"));
    }

    #[test]
    fn every_table_lists_all_site_languages() {
        for name in embedded_table_names() {
            let table: TranslationTable<serde_json::Value> = embedded(&name).unwrap();
            assert_eq!(
                table.languages(),
                LanguageCode::ALL.to_vec(),
                "{name}.json does not cover every site language"
            );
        }
    }
}

//! Property tests for language resolution.

use proptest::prelude::*;
use ui::i18n::{resolve, LanguageCode, TranslationTable};

fn language() -> impl Strategy<Value = LanguageCode> {
    prop::sample::select(LanguageCode::ALL.to_vec())
}

/// A table with a default bundle plus any subset of the other languages.
/// Each bundle is tagged with its own code so a wrong pick is visible.
fn table() -> impl Strategy<Value = TranslationTable<String>> {
    (language(), prop::collection::btree_set(language(), 0..4)).prop_map(|(default, extra)| {
        let entries = extra
            .into_iter()
            .chain([default])
            .map(|code| (code, format!("bundle:{code}")));
        TranslationTable::new(default, entries).expect("default is always present")
    })
}

/// Requests that are never a site language.
fn unsupported_code() -> impl Strategy<Value = String> {
    "[a-zA-Z-]{0,6}".prop_filter("site language", |s| s.parse::<LanguageCode>().is_err())
}

proptest! {
    #[test]
    fn default_resolves_to_itself(table in table()) {
        let d = table.default_language();
        prop_assert_eq!(resolve(&table, d, d), table.get(d).unwrap());
    }

    #[test]
    fn supported_language_is_never_overridden(table in table(), requested in language(), default in language()) {
        prop_assume!(table.contains(requested));
        prop_assert_eq!(resolve(&table, requested, default), &format!("bundle:{requested}"));
    }

    #[test]
    fn unsupported_request_degrades_to_default(table in table(), requested in unsupported_code()) {
        let d = table.default_language();
        prop_assert_eq!(resolve(&table, &requested, d), table.get(d).unwrap());
    }

    #[test]
    fn absent_language_degrades_to_default(table in table(), requested in language()) {
        prop_assume!(!table.contains(requested));
        let d = table.default_language();
        prop_assert_eq!(resolve(&table, requested, d), &format!("bundle:{d}"));
    }

    #[test]
    fn resolve_is_idempotent(table in table(), requested in "[a-z]{0,3}", default in language()) {
        let first = resolve(&table, &requested, default).clone();
        let second = resolve(&table, &requested, default).clone();
        prop_assert_eq!(first, second);
    }
}

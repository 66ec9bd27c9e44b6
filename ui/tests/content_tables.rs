//! Every embedded table decodes into the bundle type its component renders.

use ui::components::{FooterContent, HeaderContent, LanguageModalContent};
use ui::i18n::{self, LanguageCode, TranslationTable};
use ui::sections::{
    AboutContent, ContactContent, CoursesContent, GalleryContent, HeroContent, TeachersContent,
};
use ui::views::RegisterContent;

fn load<B: serde::de::DeserializeOwned>(name: &str) -> TranslationTable<B> {
    i18n::embedded(name).unwrap_or_else(|err| panic!("{name}: {err}"))
}

fn assert_full<B>(name: &str, table: &TranslationTable<B>, default: LanguageCode) {
    assert_eq!(table.default_language(), default, "{name}: default language");
    assert_eq!(table.languages(), LanguageCode::ALL.to_vec(), "{name}: languages");
}

#[test]
fn shell_tables_decode() {
    assert_full("header", &load::<HeaderContent>("header"), LanguageCode::Uz);
    assert_full(
        "language_modal",
        &load::<LanguageModalContent>("language_modal"),
        LanguageCode::Uz,
    );
    assert_full("footer", &load::<FooterContent>("footer"), LanguageCode::Uz);
}

#[test]
fn section_tables_decode() {
    assert_full("home", &load::<HeroContent>("home"), LanguageCode::En);
    assert_full("courses", &load::<CoursesContent>("courses"), LanguageCode::En);
    assert_full("teachers", &load::<TeachersContent>("teachers"), LanguageCode::En);
    assert_full("gallery", &load::<GalleryContent>("gallery"), LanguageCode::En);
    assert_full("about", &load::<AboutContent>("about"), LanguageCode::Uz);
    assert_full("contact", &load::<ContactContent>("contact"), LanguageCode::Uz);
    assert_full("register", &load::<RegisterContent>("register"), LanguageCode::Uz);
}

#[test]
fn register_title_scenario() {
    let table = load::<RegisterContent>("register");
    assert_eq!(i18n::resolve(&table, "en", LanguageCode::Uz).title, "Register Now");
    assert_eq!(
        i18n::resolve(&table, "fr", LanguageCode::Uz).title,
        table.get(LanguageCode::Uz).unwrap().title
    );
}

#[test]
fn every_teacher_has_a_bio_in_every_language() {
    let table = load::<TeachersContent>("teachers");
    for code in LanguageCode::ALL {
        let content = table.get(code).unwrap();
        assert_eq!(content.teachers.len(), 2, "{code}");
        assert!(content.teachers.iter().all(|t| !t.bio.is_empty()), "{code}");
    }
}

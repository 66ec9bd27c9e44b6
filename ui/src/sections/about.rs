use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::core::state::use_site_state;
use crate::i18n::{self, TranslationTable};

const ABOUT_IMAGE: &str = "/photo_2.png";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutContent {
    pub title: String,
    /// Blank-line separated paragraphs. After the first, a paragraph's first
    /// line is its heading.
    pub text: String,
}

/// One block of the about text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph<'a> {
    pub heading: Option<&'a str>,
    pub body: &'a str,
}

impl AboutContent {
    pub fn paragraphs(&self) -> Vec<Paragraph<'_>> {
        self.text
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .enumerate()
            .map(|(index, block)| match block.split_once('\n') {
                Some((heading, body)) if index > 0 => Paragraph {
                    heading: Some(heading.trim()),
                    body: body.trim(),
                },
                _ => Paragraph {
                    heading: None,
                    body: block,
                },
            })
            .collect()
    }
}

static TABLE: Lazy<TranslationTable<AboutContent>> = Lazy::new(|| i18n::load_table("about"));

#[component]
pub fn About() -> Element {
    let state = use_site_state();
    let t = TABLE.resolve((state.lang)());

    rsx! {
        section { id: "about", class: "about",
            div { class: "about__inner",
                div { class: "about__text",
                    h2 { class: "section-title", "{t.title}" }
                    for (index, paragraph) in t.paragraphs().into_iter().enumerate() {
                        div { key: "{index}", class: "about__paragraph",
                            if let Some(heading) = paragraph.heading {
                                h3 { class: "about__heading", "{heading}" }
                            }
                            p { "{paragraph.body}" }
                        }
                    }
                }
                img { class: "about__image", src: ABOUT_IMAGE, alt: "{t.title}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(text: &str) -> AboutContent {
        AboutContent {
            title: "About".into(),
            text: text.into(),
        }
    }

    #[test]
    fn first_block_is_plain_intro() {
        let about = content("Intro line\nstill intro\n\nScope\nWhat we do");
        let paragraphs = about.paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].heading, None);
        assert_eq!(paragraphs[0].body, "Intro line\nstill intro");
        assert_eq!(paragraphs[1].heading, Some("Scope"));
        assert_eq!(paragraphs[1].body, "What we do");
    }

    #[test]
    fn blank_blocks_are_skipped() {
        let about = content("\n\nOnly\n\n\n\n");
        assert_eq!(
            about.paragraphs(),
            vec![Paragraph { heading: None, body: "Only" }]
        );
    }

    #[test]
    fn embedded_text_has_headed_sections() {
        let t = TABLE.resolve("en");
        let paragraphs = t.paragraphs();
        assert!(paragraphs.len() > 2);
        assert_eq!(paragraphs[1].heading, Some("Scope of Activity"));
    }
}

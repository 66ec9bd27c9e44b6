use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use super::links::home_link;
use crate::core::state::use_site_state;
use crate::i18n::{self, TranslationTable};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderContent {
    pub nav: NavLabels,
    pub dark: String,
    pub light: String,
    pub language: String,
    pub menu: String,
}

/// Labels for the landing page sections, keyed by section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLabels {
    pub home: String,
    pub courses: String,
    pub teachers: String,
    pub gallery: String,
    pub contact: String,
    pub about: String,
}

impl NavLabels {
    /// `(section id, label)` in header order.
    pub fn sections(&self) -> [(&'static str, &str); 6] {
        [
            ("home", &self.home),
            ("courses", &self.courses),
            ("teachers", &self.teachers),
            ("gallery", &self.gallery),
            ("contact", &self.contact),
            ("about", &self.about),
        ]
    }
}

static TABLE: Lazy<TranslationTable<HeaderContent>> = Lazy::new(|| i18n::load_table("header"));

/// Fixed site header: brand, section anchors, theme toggle, language picker
/// button and the collapsible mobile menu.
#[component]
pub fn SiteHeader() -> Element {
    let state = use_site_state();
    let mut menu_open = use_signal(|| false);

    let t = TABLE.resolve((state.lang)());
    let theme_icon = if (state.dark_mode)() { &t.light } else { &t.dark };
    let sections = t.nav.sections();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", aria_hidden: "true", "KC" }
                    {home_link("navbar__brand-link", "KOREAN CENTER")}
                }

                nav { class: "navbar__links",
                    for (id, label) in sections {
                        a { key: "{id}", class: "navbar__link", href: "/#{id}", "{label}" }
                    }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__button",
                        onclick: move |_| state.toggle_dark_mode(),
                        "{theme_icon}"
                    }
                    button {
                        r#type: "button",
                        class: "navbar__button navbar__button--language",
                        onclick: move |_| state.open_language_modal(),
                        "🌐 {t.language}"
                    }
                    button {
                        r#type: "button",
                        class: "navbar__menu-toggle",
                        aria_label: "{t.menu}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open() {
                nav { class: "navbar__mobile",
                    for (id, label) in sections {
                        a {
                            key: "{id}",
                            class: "navbar__mobile-link",
                            href: "/#{id}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

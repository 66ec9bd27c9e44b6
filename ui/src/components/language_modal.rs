use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::core::state::use_site_state;
use crate::i18n::{self, LanguageCode, TranslationTable};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageModalContent {
    pub title: String,
    pub close: String,
}

static TABLE: Lazy<TranslationTable<LanguageModalContent>> =
    Lazy::new(|| i18n::load_table("language_modal"));

/// Full-screen language picker. Shown on first visit and from the header.
#[component]
pub fn LanguageModal() -> Element {
    let state = use_site_state();
    if !(state.language_modal)() {
        return rsx! {};
    }

    let current = (state.lang)();
    let t = TABLE.resolve(current);

    rsx! {
        div { class: "language-modal", role: "dialog", aria_modal: "true",
            div { class: "language-modal__panel",
                h2 { class: "language-modal__title", "{t.title}" }
                div { class: "language-modal__options",
                    for code in LanguageCode::ALL {
                        button {
                            key: "{code}",
                            r#type: "button",
                            class: format!(
                                "language-modal__option {}",
                                if code == current { "language-modal__option--active" } else { "" }
                            ),
                            onclick: move |_| state.select_language(code),
                            {code.native_name()}
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "language-modal__close",
                    onclick: move |_| state.close_language_modal(),
                    "{t.close}"
                }
            }
        }
    }
}

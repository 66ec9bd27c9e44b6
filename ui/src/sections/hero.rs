use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::components::register_link;
use crate::core::state::use_site_state;
use crate::i18n::{self, TranslationTable};

const HERO_IMAGE: &str = "/photo_1.png";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroContent {
    pub title: String,
    pub quote: String,
    pub button: String,
}

static TABLE: Lazy<TranslationTable<HeroContent>> = Lazy::new(|| i18n::load_table("home"));

#[component]
pub fn Hero() -> Element {
    let state = use_site_state();
    let t = TABLE.resolve((state.lang)());

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero__inner",
                div { class: "hero__media",
                    img { class: "hero__image", src: HERO_IMAGE, alt: "{t.title}" }
                }
                div { class: "hero__text",
                    h1 { class: "hero__title", "{t.title}" }
                    p { class: "hero__quote", "{t.quote}" }
                    {register_link("button button--primary hero__cta", &t.button)}
                }
            }
        }
    }
}

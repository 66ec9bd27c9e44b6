use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::core::state::use_site_state;
use crate::i18n::{self, TranslationTable};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterContent {
    pub rights: String,
}

static TABLE: Lazy<TranslationTable<FooterContent>> = Lazy::new(|| i18n::load_table("footer"));

#[component]
pub fn SiteFooter() -> Element {
    let state = use_site_state();
    let t = TABLE.resolve((state.lang)());
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "site-footer",
            p { "© {year} Korean Center. {t.rights}" }
        }
    }
}

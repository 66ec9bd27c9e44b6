//! Shared UI crate for the Korean Center site. Localized content, shell state
//! and every view live here; `web` and `desktop` only supply routing.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    // Route links supplied by each platform (components/links.rs)
    pub mod links;
    pub use links::{home_link, register_link, register_links, LinkBuilder};

    mod chrome;
    mod language_modal;
    mod site_footer;
    mod site_header;
    pub use chrome::SiteChrome;
    pub use language_modal::{LanguageModal, LanguageModalContent};
    pub use site_footer::{FooterContent, SiteFooter};
    pub use site_header::{HeaderContent, NavLabels, SiteHeader};
}

pub use crate::core::state::{use_site_state, SiteState};

/// Shared theme stylesheet. Desktop inlines the same file instead.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}

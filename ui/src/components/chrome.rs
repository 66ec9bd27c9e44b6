use dioxus::prelude::*;

use super::{LanguageModal, SiteFooter, SiteHeader};
use crate::core::state::use_site_state;

/// Page frame shared by every route: header, language picker, footer and the
/// theme class. Platforms wrap their router `Outlet` in it.
#[component]
pub fn SiteChrome(children: Element) -> Element {
    let state = use_site_state();
    let lang = (state.lang)();
    let theme = if (state.dark_mode)() { "site site--dark" } else { "site site--light" };

    rsx! {
        div { class: "{theme}", lang: "{lang}",
            SiteHeader {}
            LanguageModal {}
            main { class: "site__main", {children} }
            SiteFooter {}
        }
    }
}

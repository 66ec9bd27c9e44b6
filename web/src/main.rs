use dioxus::prelude::*;

use ui::components::{register_links, LinkBuilder, SiteChrome};
use ui::views::{Landing, Register};
use ui::SiteState;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Landing {},
    #[route("/register")]
    Register {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn link_home(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Landing {}, "{label}" })
}

fn link_register(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Register {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    SiteState::provide();
    register_links(LinkBuilder {
        home: link_home,
        register: link_register,
    });

    rsx! {
        // Global app resources
        document::Title { "Korean Center" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `SiteChrome` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebLayout() -> Element {
    rsx! {
        SiteChrome {
            Outlet::<Route> {}
        }
    }
}

#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_links, LinkBuilder, SiteChrome};
use ui::views::{Landing, Register};
use ui::SiteState;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Landing {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Korean Center – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn link_home(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Landing {}, "{label}" })
}

fn link_register(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Register {}, "{label}" })
}

#[component]
fn App() -> Element {
    SiteState::provide();
    register_links(LinkBuilder {
        home: link_home,
        register: link_register,
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Photos and videos are served from here.
#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the web crate's public assets.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/public"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("public")))
            .unwrap_or_else(|| PathBuf::from("public"))
    }
}

/// A desktop-specific layout around the shared `SiteChrome` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        SiteChrome {
            Outlet::<Route> {}
        }
    }
}

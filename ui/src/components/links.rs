use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platform-supplied route links.
///
/// `ui` does not know each platform's `Route` enum, so the web and desktop
/// crates register a `LinkBuilder` whose functions return a fully built
/// `Link` carrying the given class and label:
/// ```ignore
/// fn to_register(class: &str, label: &str) -> Element {
///     rsx!(Link { class: "{class}", to: Route::Register {}, "{label}" })
/// }
/// register_links(LinkBuilder { home: to_home, register: to_register });
/// ```
/// Without a registered builder plain anchors are rendered, which still work
/// but reload the page.
pub struct LinkBuilder {
    pub home: fn(class: &str, label: &str) -> Element,
    pub register: fn(class: &str, label: &str) -> Element,
}

static LINK_BUILDER: OnceCell<LinkBuilder> = OnceCell::new();

pub fn register_links(builder: LinkBuilder) {
    if LINK_BUILDER.set(builder).is_err() {
        tracing::debug!("link builder already registered");
    }
}

pub fn home_link(class: &str, label: &str) -> Element {
    match LINK_BUILDER.get() {
        Some(builder) => (builder.home)(class, label),
        None => rsx!(a { class: "{class}", href: "/", "{label}" }),
    }
}

pub fn register_link(class: &str, label: &str) -> Element {
    match LINK_BUILDER.get() {
        Some(builder) => (builder.register)(class, label),
        None => rsx!(a { class: "{class}", href: "/register", "{label}" }),
    }
}

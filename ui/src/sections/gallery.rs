use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::core::state::use_site_state;
use crate::i18n::{self, TranslationTable};

/// How many photos show before "show more".
pub const PREVIEW_COUNT: usize = 8;

// Newest first.
const PHOTOS: &[&str] = &[
    "/gallery/photo_12.jpg",
    "/gallery/photo_11.jpg",
    "/gallery/photo_10.jpg",
    "/gallery/photo_9.jpg",
    "/gallery/photo_8.jpg",
    "/gallery/photo_7.jpg",
    "/gallery/photo_6.jpg",
    "/gallery/photo_5.jpg",
    "/gallery/photo_4.jpg",
    "/gallery/photo_3.jpg",
    "/gallery/photo_2.jpg",
    "/gallery/photo_1.jpg",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryContent {
    pub title: String,
    pub more: String,
    pub less: String,
    pub close: String,
}

static TABLE: Lazy<TranslationTable<GalleryContent>> = Lazy::new(|| i18n::load_table("gallery"));

pub fn visible_photos<'a>(photos: &'a [&'static str], show_all: bool) -> &'a [&'static str] {
    if show_all {
        photos
    } else {
        &photos[..photos.len().min(PREVIEW_COUNT)]
    }
}

pub fn needs_toggle(photos: &[&str]) -> bool {
    photos.len() > PREVIEW_COUNT
}

#[component]
pub fn Gallery() -> Element {
    let state = use_site_state();
    let mut show_all = use_signal(|| false);
    let mut lightbox = use_signal(|| None::<&'static str>);

    let t = TABLE.resolve((state.lang)());
    let photos = visible_photos(PHOTOS, show_all());
    let toggle_label = if show_all() { &t.less } else { &t.more };

    rsx! {
        section { id: "gallery", class: "gallery",
            h2 { class: "section-title", "{t.title}" }
            div { class: "gallery__grid",
                for photo in photos.iter().copied() {
                    button {
                        key: "{photo}",
                        r#type: "button",
                        class: "gallery__item",
                        onclick: move |_| lightbox.set(Some(photo)),
                        img {
                            class: "gallery__image",
                            src: photo,
                            alt: "{t.title}",
                            loading: "lazy",
                        }
                    }
                }
            }
            if needs_toggle(PHOTOS) {
                button {
                    r#type: "button",
                    class: "button button--ghost gallery__toggle",
                    onclick: move |_| show_all.set(!show_all()),
                    "{toggle_label}"
                }
            }
            if let Some(photo) = lightbox() {
                div {
                    class: "lightbox",
                    role: "dialog",
                    onclick: move |_| lightbox.set(None),
                    img { class: "lightbox__image", src: photo, alt: "{t.title}" }
                    button {
                        r#type: "button",
                        class: "lightbox__close",
                        onclick: move |_| lightbox.set(None),
                        "{t.close}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_caps_at_eight() {
        assert_eq!(visible_photos(PHOTOS, false).len(), PREVIEW_COUNT);
        assert_eq!(visible_photos(PHOTOS, true).len(), PHOTOS.len());
    }

    #[test]
    fn short_galleries_have_no_toggle() {
        let few = &PHOTOS[..5];
        assert!(!needs_toggle(few));
        assert_eq!(visible_photos(few, false), few);
        assert!(needs_toggle(PHOTOS));
    }
}

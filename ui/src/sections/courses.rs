use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::components::register_link;
use crate::core::state::use_site_state;
use crate::i18n::{self, TranslationTable};

const COURSE_VIDEO: &str = "/courses.mov";
const FEATURE_ICONS: [&str; 4] = ["📖", "⏰", "🏆", "✅"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoursesContent {
    pub heading: String,
    pub description: String,
    pub features: Vec<String>,
    pub button: String,
    pub duration: String,
}

impl CoursesContent {
    /// Features paired with their icon. Icons repeat if a translation lists more features.
    pub fn features_with_icons(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FEATURE_ICONS
            .iter()
            .copied()
            .cycle()
            .zip(self.features.iter().map(String::as_str))
    }
}

static TABLE: Lazy<TranslationTable<CoursesContent>> = Lazy::new(|| i18n::load_table("courses"));

#[component]
pub fn Courses() -> Element {
    let state = use_site_state();
    let t = TABLE.resolve((state.lang)());

    rsx! {
        section { id: "courses", class: "courses",
            div { class: "courses__inner",
                div { class: "courses__text",
                    h2 { class: "section-title", "{t.heading}" }
                    p { class: "courses__description", "{t.description}" }
                    ul { class: "courses__features",
                        for (index, (icon, feature)) in t.features_with_icons().enumerate() {
                            li { key: "{index}", class: "courses__feature",
                                span { class: "courses__feature-icon", "{icon}" }
                                span { "{feature}" }
                            }
                        }
                    }
                    {register_link("button button--primary", &t.button)}
                }
                div { class: "courses__media",
                    video {
                        class: "courses__video",
                        src: COURSE_VIDEO,
                        controls: true,
                        muted: true,
                        playsinline: true,
                    }
                    span { class: "courses__badge", "{t.duration}" }
                }
            }
        }
    }
}
